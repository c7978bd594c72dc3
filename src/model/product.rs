use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Popular,
    LimitedTime,
    Classic,
    NewArrival,
}

impl ProductCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::LimitedTime => "limited_time",
            Self::Classic => "classic",
            Self::NewArrival => "new_arrival",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(Self::Popular),
            "limited_time" => Ok(Self::LimitedTime),
            "classic" => Ok(Self::Classic),
            "new_arrival" => Ok(Self::NewArrival),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub description: String,
    pub category: ProductCategory,
    pub sell: bool,
    /// Image URLs in display order
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PaginatedProductsDto {
    pub data: Vec<ProductDto>,
    pub total: u64,
}

/// Multipart form accepted by product create and edit.
///
/// Only documents the form; handlers read the parts through the upload middleware.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ProductFormDto {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub category: Option<ProductCategory>,
    pub sell: Option<bool>,
    /// One or more png/jpeg files, 1 MiB each at most
    #[schema(value_type = Vec<String>, format = Binary)]
    pub images: Vec<Vec<u8>>,
}
