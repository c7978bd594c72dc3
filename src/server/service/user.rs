//! User service for business logic.
//!
//! This module provides the `UserService` for registration, profiles and the admin
//! user management operations. It works with domain models rather than DTOs.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{cart::CartRepository, user::UserRepository},
    error::AppError,
    model::user::{
        CreateUserParam, PaginatedUsers, Profile, RegisterUserParam, UpdateUserParam, User,
    },
    util::pagination::ListParams,
};

/// bcrypt work factor for stored passwords.
pub const PASSWORD_HASH_COST: u32 = 10;

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Validates fields in order (account, password, name, phone), hashes the password
    /// and inserts the user with the regular role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::ValidationErr)` - First field that failed validation
    /// - `Err(AppError::Conflict)` - Account already registered
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        param.validate()?;

        let password_hash = bcrypt::hash(&param.password, PASSWORD_HASH_COST)?;

        let result = UserRepository::new(self.db)
            .create(CreateUserParam {
                account: param.account,
                password_hash,
                name: param.name,
                phone: param.phone,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!("Registered user {}", user.id);
                Ok(user)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::Conflict("Account already registered".to_string()))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Builds the profile of an already loaded user.
    pub async fn profile_of(&self, user: User) -> Result<Profile, AppError> {
        let cart_quantity = CartRepository::new(self.db).total_quantity(user.id).await?;

        Ok(Profile {
            user,
            cart_quantity,
        })
    }

    /// Applies the caller's own profile edit.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The updated profile
    /// - `Err(AppError::ValidationErr)` - A supplied field failed validation
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn update_own(
        &self,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<Profile, AppError> {
        let user = self.update(user_id, param).await?;
        self.profile_of(user).await
    }

    /// Updates any user, used by admins and by profile edits.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::ValidationErr)` - A supplied field failed validation
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn update(&self, user_id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        param.validate()?;

        UserRepository::new(self.db)
            .update(user_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Stores a new avatar URL for the user.
    pub async fn set_avatar(&self, user_id: i32, url: String) -> Result<Profile, AppError> {
        self.update_own(user_id, UpdateUserParam::avatar(url)).await
    }

    /// Deletes a user along with their tokens, cart and orders.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).delete(user_id).await?;
        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {}", user_id);

        Ok(())
    }

    /// Retrieves users for the admin listing.
    pub async fn get_paginated(&self, params: &ListParams) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db).get_paginated(params).await?;

        Ok(PaginatedUsers { users, total })
    }
}
