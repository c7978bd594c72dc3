//! User domain models and parameters.
//!
//! Provides the domain model for accounts along with the parameter types used by
//! registration, self-service profile edits and admin edits. Parameter types own
//! their field validation so every entry point applies the same rules.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{
        AdminUpdateUserDto, PaginatedUsersDto, ProfileDto, RegisterDto, UpdateProfileDto,
        UserDto, UserRole,
    },
    server::{error::validation::ValidationError, util::validate},
};

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Email address used to log in
    pub account: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    pub role: UserRole,
    pub name: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub blacklist: bool,
    pub blacklist_reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            account: entity.account,
            password_hash: entity.password,
            role: UserRole::from_i32(entity.role),
            name: entity.name,
            phone: entity.phone,
            avatar: entity.avatar,
            blacklist: entity.blacklist,
            blacklist_reason: entity.blacklist_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts the user to the admin listing DTO.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            account: self.account,
            role: self.role,
            name: self.name,
            phone: self.phone,
            avatar: self.avatar,
            blacklist: self.blacklist,
            blacklist_reason: self.blacklist_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A user together with their derived cart quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user: User,
    /// Sum of quantities across the user's cart lines.
    pub cart_quantity: i64,
}

impl Profile {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.user.id,
            account: self.user.account,
            role: self.user.role,
            cart: self.cart_quantity,
            name: self.user.name,
            phone: self.user.phone,
            avatar: self.user.avatar,
            blacklist: self.user.blacklist,
            blacklist_reason: self.user.blacklist_reason,
        }
    }
}

/// Paginated collection of users.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Users matching the search across all pages.
    pub total: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            data: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
        }
    }
}

/// Registration input with the plaintext password.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub account: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            account: dto.account.trim().to_string(),
            password: dto.password,
            name: dto.name.trim().to_string(),
            phone: dto.phone.trim().to_string(),
        }
    }

    /// Validates fields in order; the first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::account(&self.account)?;
        validate::password(&self.password)?;
        validate::name(&self.name)?;
        validate::phone(&self.phone)?;
        Ok(())
    }
}

/// Row values for inserting a new user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub account: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
}

/// Partial update of a user. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParam {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub blacklist: Option<bool>,
    pub blacklist_reason: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateUserParam {
    /// Self-service edit: only name and phone are accepted.
    pub fn from_profile_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            phone: dto.phone.map(|p| p.trim().to_string()),
            ..Default::default()
        }
    }

    pub fn from_admin_dto(dto: AdminUpdateUserDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            phone: dto.phone.map(|p| p.trim().to_string()),
            role: dto.role,
            blacklist: dto.blacklist,
            blacklist_reason: dto.blacklist_reason,
            avatar: None,
        }
    }

    pub fn avatar(url: String) -> Self {
        Self {
            avatar: Some(url),
            ..Default::default()
        }
    }

    /// Re-runs field validation on the supplied fields only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate::name(name)?;
        }
        if let Some(phone) = &self.phone {
            validate::phone(phone)?;
        }
        Ok(())
    }
}
