//! Multipart intake for image uploads.
//!
//! Text parts are collected as form fields. File parts must be PNG or JPEG and at
//! most `MAX_FILE_SIZE` bytes; the size is enforced while streaming so oversized
//! files are never fully buffered.

use std::collections::HashMap;

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};

use crate::server::error::upload::UploadError;

/// Per-file size limit (1 MiB).
pub const MAX_FILE_SIZE: usize = 1024 * 1024;

pub const ACCEPTED_CONTENT_TYPES: [&str; 3] = ["image/png", "image/jpg", "image/jpeg"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    /// Files in the order they appeared in the body.
    pub files: Vec<UploadedFile>,
}

impl UploadForm {
    /// Reads every part of a multipart body.
    ///
    /// # Returns
    /// - `Ok(UploadForm)` - All parts read and every file accepted
    /// - `Err(UploadError::InvalidFormat)` - A file is not PNG or JPEG
    /// - `Err(UploadError::FileTooLarge)` - A file or the whole body exceeds its limit
    /// - `Err(UploadError::Malformed)` - Body is not valid multipart
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, UploadError> {
        let mut form = Self::default();

        while let Some(mut field) = multipart.next_field().await.map_err(rejected)? {
            let name = field.name().unwrap_or_default().to_string();

            let Some(file_name) = field.file_name().map(str::to_owned) else {
                let text = field.text().await.map_err(rejected)?;
                form.fields.insert(name, text);
                continue;
            };

            let content_type = field.content_type().unwrap_or_default().to_ascii_lowercase();
            check_content_type(&content_type)?;

            let mut bytes = Vec::new();
            while let Some(chunk) = field.chunk().await.map_err(rejected)? {
                append_chunk(&mut bytes, &chunk)?;
            }

            form.files.push(UploadedFile {
                file_name,
                content_type,
                bytes,
            });
        }

        Ok(form)
    }

    /// First uploaded file, for routes that require exactly one image.
    pub fn require_file(&self) -> Result<&UploadedFile, UploadError> {
        self.files.first().ok_or(UploadError::NoFile)
    }
}

fn check_content_type(content_type: &str) -> Result<(), UploadError> {
    if ACCEPTED_CONTENT_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err(UploadError::InvalidFormat)
    }
}

fn append_chunk(buffer: &mut Vec<u8>, chunk: &[u8]) -> Result<(), UploadError> {
    if buffer.len() + chunk.len() > MAX_FILE_SIZE {
        return Err(UploadError::FileTooLarge);
    }
    buffer.extend_from_slice(chunk);
    Ok(())
}

/// Maps a body-limit rejection to `FileTooLarge`, anything else to `Malformed`.
fn rejected(err: MultipartError) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::FileTooLarge
    } else {
        UploadError::Malformed(err.body_text())
    }
}
