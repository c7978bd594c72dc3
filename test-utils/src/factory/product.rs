//! Product factory for creating test product entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db)
///     .name("Matcha Roll")
///     .price(120)
///     .sell(false)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i32,
    description: String,
    category: String,
    sell: bool,
    images: Vec<String>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - price: `100`
    /// - category: `"classic"`
    /// - sell: `true`
    /// - images: one placeholder URL
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            price: 100,
            description: format!("Description for product {}", id),
            category: "classic".to_string(),
            sell: true,
            images: vec![format!("https://img.example.com/product-{}.png", id)],
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the stored category value (`popular`, `limited_time`, `classic`, `new_arrival`).
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn sell(mut self, sell: bool) -> Self {
        self.sell = sell;
        self
    }

    /// Replaces the image URLs attached to the product.
    pub fn images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Builds and inserts the product and its images.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            category: ActiveValue::Set(self.category),
            sell: ActiveValue::Set(self.sell),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for url in self.images {
            entity::product_image::ActiveModel {
                product_id: ActiveValue::Set(product.id),
                url: ActiveValue::Set(url),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(product)
    }
}

/// Creates an on-sale product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
