use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    /// Always `false`
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Envelope wrapping every successful response.
///
/// `result` is omitted from the JSON when the operation produces nothing.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            result: Some(result),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without a result.
    pub fn empty() -> Self {
        Self {
            success: true,
            message: String::new(),
            result: None,
        }
    }
}
