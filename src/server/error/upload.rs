use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    /// File MIME type is not png or jpeg.
    #[error("Invalid file format")]
    InvalidFormat,

    /// File exceeds the per-file size limit.
    #[error("File too large")]
    FileTooLarge,

    /// A route that requires an image received none.
    #[error("No file uploaded")]
    NoFile,

    /// Multipart body could not be read.
    ///
    /// # Fields
    /// - Reason reported by the multipart parser, logged only
    #[error("Malformed multipart body: {0}")]
    Malformed(String),
}

/// Converts upload errors into 400 Bad Request responses.
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Malformed(reason) => {
                tracing::debug!("Rejected multipart body: {}", reason);
                "Invalid data format".to_string()
            }
            err => err.to_string(),
        };

        (StatusCode::BAD_REQUEST, Json(ErrorDto::new(message))).into_response()
    }
}
