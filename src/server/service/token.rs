//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs whose subject is the user ID. Expiry is checked apart
//! from the signature so callers can decide whether an expired token is still
//! acceptable for the route being served.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::error::{auth::AuthError, AppError};

/// Lifetime of a token minted at login.
pub const LOGIN_TOKEN_TTL_DAYS: i64 = 14;

/// Lifetime of a token minted by extending an existing one.
pub const EXTENDED_TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Random ID so tokens minted in the same second differ
    pub jti: String,
}

/// Outcome of checking a token's signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedToken {
    pub user_id: i32,
    /// Whether `exp` has passed; the signature is valid either way.
    pub expired: bool,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Mints a token for the user that expires after `ttl`.
    pub fn mint(&self, user_id: i32, ttl: Duration) -> Result<String, AppError> {
        self.mint_at(user_id, Utc::now(), ttl)
    }

    /// Mints a token as if issued at `issued_at`.
    pub fn mint_at(
        &self,
        user_id: i32,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Verifies the signature and reports whether the token has expired.
    ///
    /// # Returns
    /// - `Ok(VerifiedToken)` - Signature valid, subject is a user ID
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered or signed with another key
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<VerifiedToken, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!("Rejected bearer token: {}", e);
            AuthError::InvalidToken
        })?;

        let user_id = data
            .claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(VerifiedToken {
            user_id,
            expired: data.claims.exp < now.timestamp(),
        })
    }
}
