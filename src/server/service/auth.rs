//! Login and token lifecycle.
//!
//! A user holds an ordered set of valid tokens. Login appends a 14-day token,
//! extend swaps the presented token for a fresh 7-day one in the same position,
//! and logout removes the presented token.

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cart::CartRepository, user::UserRepository, user_token::UserTokenRepository},
    error::{auth::AuthError, AppError},
    model::user::Profile,
    service::token::{TokenService, EXTENDED_TOKEN_TTL_DAYS, LOGIN_TOKEN_TTL_DAYS},
};

/// Successful login: the new token plus the user's profile.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub profile: Profile,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Checks the account and password, then issues and stores a login token.
    ///
    /// # Arguments
    /// - `account` - Login account
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(LoginResult)` - Token minted and appended to the user's tokens
    /// - `Err(AuthError::MissingCredentials)` - Account or password is empty
    /// - `Err(AuthError::AccountNotFound)` - No user with that account
    /// - `Err(AuthError::IncorrectPassword)` - Password does not match
    pub async fn login(&self, account: &str, password: &str) -> Result<LoginResult, AppError> {
        // Registration stores the trimmed account, so look it up the same way.
        let account = account.trim();
        if account.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let user = UserRepository::new(self.db)
            .find_by_account(account)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::IncorrectPassword.into());
        }

        let token = self
            .tokens
            .mint(user.id, Duration::days(LOGIN_TOKEN_TTL_DAYS))?;
        UserTokenRepository::new(self.db)
            .create(user.id, &token)
            .await?;

        let cart_quantity = CartRepository::new(self.db).total_quantity(user.id).await?;

        tracing::info!("User {} logged in", user.id);

        Ok(LoginResult {
            token,
            profile: Profile {
                user,
                cart_quantity,
            },
        })
    }

    /// Replaces the presented token with a freshly minted one in place.
    ///
    /// # Returns
    /// - `Ok(String)` - The new token
    /// - `Err(AuthError::InvalidToken)` - The presented token is no longer stored
    pub async fn extend(&self, user_id: i32, token: &str) -> Result<String, AppError> {
        let new_token = self
            .tokens
            .mint(user_id, Duration::days(EXTENDED_TOKEN_TTL_DAYS))?;

        let replaced = UserTokenRepository::new(self.db)
            .replace(user_id, token, &new_token)
            .await?;
        if !replaced {
            return Err(AuthError::InvalidToken.into());
        }

        Ok(new_token)
    }

    /// Removes every stored copy of the presented token.
    pub async fn logout(&self, user_id: i32, token: &str) -> Result<(), AppError> {
        let removed = UserTokenRepository::new(self.db)
            .delete(user_id, token)
            .await?;

        tracing::debug!("User {} logged out, {} token(s) removed", user_id, removed);

        Ok(())
    }
}
