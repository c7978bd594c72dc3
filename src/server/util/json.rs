use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejection renders as the standard error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
