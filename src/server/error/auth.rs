use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Login body is missing the account or the password.
    #[error("Missing credentials")]
    MissingCredentials,

    /// No user is registered under the supplied account.
    #[error("Account not found")]
    AccountNotFound,

    /// Password did not match the stored bcrypt hash.
    #[error("Incorrect password")]
    IncorrectPassword,

    /// Request carries no `Authorization: Bearer <token>` header.
    #[error("Missing bearer token")]
    MissingBearerToken,

    /// Token failed signature checks, or no stored (user, token) record matches it.
    #[error("Invalid token")]
    InvalidToken,

    /// Token is past its expiry on a route that does not accept expired tokens.
    #[error("Token expired")]
    TokenExpired,

    /// Authenticated user lacks a permission the route requires.
    ///
    /// # Fields
    /// - ID of the user that was denied
    #[error("User {0} is missing a required permission")]
    AccessDenied(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `MissingCredentials`
/// - 401 Unauthorized - For account, password and bearer token failures
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::AccessDenied(user_id) => {
                tracing::debug!("Denied access for user {}", user_id);

                return (StatusCode::FORBIDDEN, Json(ErrorDto::new("Access denied")))
                    .into_response();
            }
            _ => StatusCode::UNAUTHORIZED,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
