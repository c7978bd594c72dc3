//! Stored login tokens.
//!
//! A token is only honoured while a row pairing it with its user exists, so removing
//! rows revokes tokens server-side. Rows keep issue order through their primary key.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct UserTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a token to the user's set of valid tokens.
    pub async fn create(&self, user_id: i32, token: &str) -> Result<(), DbErr> {
        entity::user_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Checks whether the (user, token) pair is stored.
    pub async fn exists(&self, user_id: i32, token: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::UserToken::find()
            .filter(entity::user_token::Column::UserId.eq(user_id))
            .filter(entity::user_token::Column::Token.eq(token))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Swaps the first stored occurrence of `old` for `new`, keeping its position.
    ///
    /// # Returns
    /// - `Ok(true)` - Token replaced
    /// - `Ok(false)` - `old` is not stored for this user, nothing written
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn replace(&self, user_id: i32, old: &str, new: &str) -> Result<bool, DbErr> {
        let Some(row) = entity::prelude::UserToken::find()
            .filter(entity::user_token::Column::UserId.eq(user_id))
            .filter(entity::user_token::Column::Token.eq(old))
            .order_by_asc(entity::user_token::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active = row.into_active_model();
        active.token = ActiveValue::Set(new.to_string());
        active.update(self.db).await?;

        Ok(true)
    }

    /// Removes every stored entry equal to `token` for the user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn delete(&self, user_id: i32, token: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::UserToken::delete_many()
            .filter(entity::user_token::Column::UserId.eq(user_id))
            .filter(entity::user_token::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Lists the user's stored tokens in issue order.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::UserToken::find()
            .filter(entity::user_token::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_token::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.token).collect())
    }
}
