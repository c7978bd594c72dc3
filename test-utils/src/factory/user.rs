//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Plaintext password every factory user gets unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Factory for creating test users with customizable fields.
///
/// Passwords are hashed with a low bcrypt cost so tests stay fast while still
/// exercising real verification.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .account("admin@example.com")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    account: String,
    password: String,
    name: String,
    phone: String,
    admin: bool,
    blacklist: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - account: `"user{id}@example.com"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - name: `"User {id}"`
    /// - phone: `"0912345678"`
    /// - admin: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            account: format!("user{}@example.com", id),
            password: DEFAULT_PASSWORD.to_string(),
            name: format!("User {}", id),
            phone: "0912345678".to_string(),
            admin: false,
            blacklist: false,
        }
    }

    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Sets the plaintext password; it is hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets whether the user has the admin role.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn blacklist(mut self, blacklist: bool) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let hash =
            bcrypt::hash(&self.password, 4).map_err(|e| DbErr::Custom(e.to_string()))?;
        let now = Utc::now();
        entity::user::ActiveModel {
            account: ActiveValue::Set(self.account),
            password: ActiveValue::Set(hash),
            role: ActiveValue::Set(if self.admin { 1 } else { 0 }),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            avatar: ActiveValue::Set(None),
            blacklist: ActiveValue::Set(self.blacklist),
            blacklist_reason: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
