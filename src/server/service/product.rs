//! Product catalog business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::{validation::ValidationError, AppError},
    model::product::{
        CreateProductParam, PaginatedProducts, Product, ProductScope, UpdateProductParam,
    },
    util::pagination::ListParams,
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product; at least one image is required.
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, AppError> {
        if param.images.is_empty() {
            return Err(ValidationError::ImageRequired.into());
        }

        let product = ProductRepository::new(self.db).create(param).await?;

        tracing::info!("Created product {} ({})", product.id, product.name);

        Ok(product)
    }

    /// Gets a product by ID whether or not it is on sale.
    ///
    /// # Returns
    /// - `Ok(Product)` - Product found
    /// - `Err(AppError::NotFound)` - No product with that ID
    pub async fn get_by_id(&self, product_id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        scope: ProductScope,
        params: &ListParams,
    ) -> Result<PaginatedProducts, AppError> {
        let (products, total) = ProductRepository::new(self.db)
            .get_paginated(scope, params)
            .await?;

        Ok(PaginatedProducts { products, total })
    }

    /// Updates a product; images are replaced only when new ones are supplied.
    ///
    /// # Returns
    /// - `Ok(Product)` - The updated product
    /// - `Err(AppError::NotFound)` - No product with that ID
    pub async fn update(
        &self,
        product_id: i32,
        mut param: UpdateProductParam,
    ) -> Result<Product, AppError> {
        if param.images.as_ref().is_some_and(|images| images.is_empty()) {
            param.images = None;
        }

        ProductRepository::new(self.db)
            .update(product_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Deletes a product.
    ///
    /// # Returns
    /// - `Ok(())` - Product deleted
    /// - `Err(AppError::NotFound)` - No product with that ID
    pub async fn delete(&self, product_id: i32) -> Result<(), AppError> {
        let deleted = ProductRepository::new(self.db).delete(product_id).await?;
        if !deleted {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        tracing::info!("Deleted product {}", product_id);

        Ok(())
    }
}
