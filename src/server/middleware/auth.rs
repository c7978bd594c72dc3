use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, user_token::UserTokenRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

/// Routes that still accept a token past its expiry so it can be rotated or revoked.
pub const EXPIRED_TOKEN_ROUTES: [&str; 2] = ["/users/extend", "/users/logout"];

pub enum Permission {
    Admin,
}

/// Raw bearer token together with the path it was presented on.
#[derive(Debug, Clone)]
pub struct BearerToken {
    pub token: String,
    pub path: String,
}

impl BearerToken {
    /// Parses `Bearer <token>`; the scheme is matched case-insensitively.
    fn parse(header: &str) -> Option<&str> {
        let (scheme, token) = header.trim().split_once(' ')?;
        let token = token.trim();
        (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(BearerToken::parse)
            .ok_or(AuthError::MissingBearerToken)?;

        Ok(Self {
            token: token.to_string(),
            path: parts.uri.path().to_string(),
        })
    }
}

/// User resolved from a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    /// The presented token, needed by extend and logout.
    pub token: String,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    bearer: &'a BearerToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        bearer: &'a BearerToken,
    ) -> Self {
        Self { db, tokens, bearer }
    }

    /// Resolves the bearer token to a user and checks the given permissions.
    ///
    /// The token must carry a valid signature, must not be expired unless the route is
    /// listed in `EXPIRED_TOKEN_ROUTES`, and must still be stored for its user.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Token valid and all permissions satisfied
    /// - `Err(AuthError::InvalidToken)` - Bad signature, revoked token or unknown user
    /// - `Err(AuthError::TokenExpired)` - Expired on a route that requires a live token
    /// - `Err(AuthError::AccessDenied)` - A required permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthenticatedUser, AppError> {
        let verified = self.tokens.verify(&self.bearer.token)?;

        if verified.expired && !EXPIRED_TOKEN_ROUTES.contains(&self.bearer.path.as_str()) {
            return Err(AuthError::TokenExpired.into());
        }

        let stored = UserTokenRepository::new(self.db)
            .exists(verified.user_id, &self.bearer.token)
            .await?;
        if !stored {
            return Err(AuthError::InvalidToken.into());
        }

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(verified.user_id)
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(user.id).into());
                    }
                }
            }
        }

        Ok(AuthenticatedUser {
            user,
            token: self.bearer.token.clone(),
        })
    }
}
