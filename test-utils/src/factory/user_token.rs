//! Factory for stored login tokens.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Stores a raw token string for the given user.
///
/// The token is not validated; tests that need a verifiable token should mint
/// one through the token service and store that string.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the token
/// - `token` - Token string to store
///
/// # Returns
/// - `Ok(entity::user_token::Model)` - Created token row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_token(
    db: &DatabaseConnection,
    user_id: i32,
    token: impl Into<String>,
) -> Result<entity::user_token::Model, DbErr> {
    entity::user_token::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        token: ActiveValue::Set(token.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
