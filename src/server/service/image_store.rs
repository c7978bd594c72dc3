//! Cloudinary image uploads.
//!
//! Files accepted by the multipart intake are pushed to the Cloudinary upload API as
//! signed requests and referenced afterwards only by their `secure_url`.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::server::{error::AppError, middleware::upload::UploadedFile};

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: String,
}

#[derive(Clone)]
pub struct CloudinaryStore {
    http: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    api_url: String,
}

impl CloudinaryStore {
    /// Creates a store for one Cloudinary cloud.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `cloud_name` - Cloudinary cloud name
    /// - `api_key` - API key sent with each upload
    /// - `api_secret` - Secret used to sign uploads, never sent
    /// - `api_url` - Base URL of the upload API
    pub fn new(
        http: reqwest::Client,
        cloud_name: String,
        api_key: String,
        api_secret: String,
        api_url: String,
    ) -> Self {
        Self {
            http,
            cloud_name,
            api_key,
            api_secret,
            api_url,
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.api_url.trim_end_matches('/'),
            self.cloud_name
        )
    }

    /// Uploads one file and returns its public HTTPS URL.
    ///
    /// # Returns
    /// - `Ok(String)` - `secure_url` reported by Cloudinary
    /// - `Err(AppError::ReqwestErr)` - Request failed or Cloudinary returned an error status
    /// - `Err(AppError::InternalError)` - Response carried no `secure_url`
    pub async fn upload(&self, file: &UploadedFile) -> Result<String, AppError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(&timestamp, &self.api_secret);

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;

        let form = Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        let body: UploadResponse = response.json().await?;
        if body.secure_url.is_empty() {
            return Err(AppError::InternalError(format!(
                "Cloudinary returned no secure_url for {}",
                file.file_name
            )));
        }

        tracing::debug!("Uploaded {} to {}", file.file_name, body.secure_url);

        Ok(body.secure_url)
    }

    /// Uploads files in order, stopping at the first failure.
    pub async fn upload_all(&self, files: &[UploadedFile]) -> Result<Vec<String>, AppError> {
        let mut urls = Vec::with_capacity(files.len());
        for file in files {
            urls.push(self.upload(file).await?);
        }
        Ok(urls)
    }
}

/// Hex SHA-256 over the signed parameters followed by the API secret.
fn sign(timestamp: &str, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("timestamp={}{}", timestamp, api_secret));
    hex::encode(hasher.finalize())
}
