//! Product domain models and parameters.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::product::{PaginatedProductsDto, ProductCategory, ProductDto},
    server::error::validation::ValidationError,
};

/// Catalog product with its images in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub description: String,
    pub category: ProductCategory,
    pub sell: bool,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Converts an entity model and its image rows into the domain model.
    ///
    /// # Arguments
    /// - `entity` - Product row
    /// - `images` - Image rows already ordered by ID
    ///
    /// # Returns
    /// - `Ok(Product)` - Converted product
    /// - `Err(DbErr::Custom)` - Stored category is not a known value
    pub fn from_entity(
        entity: entity::product::Model,
        images: Vec<entity::product_image::Model>,
    ) -> Result<Self, DbErr> {
        let category = entity.category.parse::<ProductCategory>().map_err(|_| {
            DbErr::Custom(format!(
                "Unknown category '{}' stored for product {}",
                entity.category, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            description: entity.description,
            category,
            sell: entity.sell,
            images: images.into_iter().map(|i| i.url).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            category: self.category,
            sell: self.sell,
            images: self.images,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub total: u64,
}

impl PaginatedProducts {
    pub fn into_dto(self) -> PaginatedProductsDto {
        PaginatedProductsDto {
            data: self.products.into_iter().map(Product::into_dto).collect(),
            total: self.total,
        }
    }
}

/// Which products a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductScope {
    /// Every product, for the admin panel
    All,
    /// Only products currently on sale
    OnSale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParam {
    pub name: String,
    pub price: i32,
    pub description: String,
    pub category: ProductCategory,
    pub sell: bool,
    /// Uploaded image URLs; filled in after the files reach the image store.
    pub images: Vec<String>,
}

impl CreateProductParam {
    /// Builds create parameters from multipart text fields.
    ///
    /// Missing fields are reported the same way as blank ones. `sell` defaults
    /// to `true`.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let parsed = ProductFields::parse(fields)?;

        Ok(Self {
            name: parsed.name.ok_or(ValidationError::ProductNameRequired)?,
            price: parsed.price.ok_or(ValidationError::InvalidPrice)?,
            description: parsed
                .description
                .ok_or(ValidationError::DescriptionRequired)?,
            category: parsed.category.ok_or(ValidationError::InvalidCategory)?,
            sell: parsed.sell.unwrap_or(true),
            images: Vec::new(),
        })
    }
}

/// Partial product update. `images` replaces the whole image list when set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProductParam {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub category: Option<ProductCategory>,
    pub sell: Option<bool>,
    pub images: Option<Vec<String>>,
}

impl UpdateProductParam {
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let parsed = ProductFields::parse(fields)?;

        Ok(Self {
            name: parsed.name,
            price: parsed.price,
            description: parsed.description,
            category: parsed.category,
            sell: parsed.sell,
            images: None,
        })
    }
}

/// Typed view over the product form's text fields; absent fields are `None`.
struct ProductFields {
    name: Option<String>,
    price: Option<i32>,
    description: Option<String>,
    category: Option<ProductCategory>,
    sell: Option<bool>,
}

impl ProductFields {
    fn parse(fields: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let text = |key: &str| fields.get(key).map(|v| v.trim().to_string());

        let name = match text("name") {
            Some(name) if name.is_empty() => return Err(ValidationError::ProductNameRequired),
            name => name,
        };
        let price = match text("price") {
            Some(raw) => {
                let price = raw
                    .parse::<i32>()
                    .map_err(|_| ValidationError::InvalidPrice)?;
                if price < 0 {
                    return Err(ValidationError::NegativePrice);
                }
                Some(price)
            }
            None => None,
        };
        let description = match text("description") {
            Some(d) if d.is_empty() => return Err(ValidationError::DescriptionRequired),
            d => d,
        };
        let category = match text("category") {
            Some(raw) => Some(
                raw.parse::<ProductCategory>()
                    .map_err(|_| ValidationError::InvalidCategory)?,
            ),
            None => None,
        };
        let sell = match text("sell").as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(_) => return Err(ValidationError::InvalidSell),
            None => None,
        };

        Ok(Self {
            name,
            price,
            description,
            category,
            sell,
        })
    }
}
