use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account role, stored and sent on the wire as `0` (user) or `1` (admin).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(into = "i32", try_from = "i32")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Maps the stored integer to a role; anything but `1` is a regular user.
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::Admin,
            _ => Self::User,
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            Self::User => 0,
            Self::Admin => 1,
        }
    }
}

impl From<UserRole> for i32 {
    fn from(role: UserRole) -> Self {
        role.as_i32()
    }
}

impl TryFrom<i32> for UserRole {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::User),
            1 => Ok(Self::Admin),
            other => Err(format!("unknown role {}", other)),
        }
    }
}

/// Account registration payload.
///
/// Missing fields default to empty so they fail field validation with a
/// specific message instead of a generic body rejection.
#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterDto {
    pub account: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginDto {
    pub account: String,
    pub password: String,
}

/// The authenticated user's own profile.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: i32,
    pub account: String,
    #[schema(value_type = i32)]
    pub role: UserRole,
    /// Sum of quantities across the cart
    pub cart: i64,
    pub name: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub blacklist: bool,
    pub blacklist_reason: String,
}

/// Login result: the freshly minted token plus the profile.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultDto {
    pub token: String,
    #[serde(flatten)]
    pub profile: ProfileDto,
}

/// Fields a user may change on their own profile.
#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Fields an admin may change on any user.
#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateUserDto {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub role: Option<UserRole>,
    pub blacklist: Option<bool>,
    pub blacklist_reason: Option<String>,
}

/// User as listed in the admin panel.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub account: String,
    #[schema(value_type = i32)]
    pub role: UserRole,
    pub name: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub blacklist: bool,
    pub blacklist_reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub data: Vec<UserDto>,
    /// Users matching the search, across all pages
    pub total: u64,
}
