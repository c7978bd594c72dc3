//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles registration inserts, lookups by ID and account, partial updates, deletes
//! and the admin listing with conversion from entity models at the repository boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{fetch_page, sort_direction, substring_pattern},
    model::user::{CreateUserParam, UpdateUserParam, User},
    util::pagination::ListParams,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with the regular user role.
    ///
    /// # Arguments
    /// - `param` - Account, hashed password, name and phone
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `account`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            account: ActiveValue::Set(param.account),
            password: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(0),
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(param.phone),
            avatar: ActiveValue::Set(None),
            blacklist: ActiveValue::Set(false),
            blacklist_reason: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their login account.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered under that account
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_account(&self, account: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Account.eq(account))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Applies a partial update and bumps `updated_at`.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to update
    /// - `param` - Fields to change; `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_i32());
        }
        if let Some(blacklist) = param.blacklist {
            active.blacklist = ActiveValue::Set(blacklist);
        }
        if let Some(reason) = param.blacklist_reason {
            active.blacklist_reason = ActiveValue::Set(reason);
        }
        if let Some(avatar) = param.avatar {
            active.avatar = ActiveValue::Set(Some(avatar));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user; tokens, cart lines and orders cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets users with pagination, filtered by a case-insensitive account search.
    ///
    /// # Arguments
    /// - `params` - Sort, page and search parameters
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the number matching the search
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, params: &ListParams) -> Result<(Vec<User>, u64), DbErr> {
        let direction = sort_direction(params);
        let query = entity::prelude::User::find()
            .filter(entity::user::Column::Account.like(substring_pattern(&params.search)))
            .order_by(sort_column(&params.sort_by), direction.clone())
            .order_by(entity::user::Column::Id, direction);

        let (entities, total) = fetch_page(self.db, query, params).await?;

        Ok((entities.into_iter().map(User::from_entity).collect(), total))
    }
}

fn sort_column(sort_by: &str) -> entity::user::Column {
    use entity::user::Column;

    match sort_by {
        "account" => Column::Account,
        "name" => Column::Name,
        "role" => Column::Role,
        "blacklist" => Column::Blacklist,
        "updatedAt" => Column::UpdatedAt,
        _ => Column::CreatedAt,
    }
}
