//! Product data repository for database operations.
//!
//! Products own an ordered list of image rows. Every read attaches the images in
//! primary key order, and writes that touch images run inside a transaction so a
//! product is never visible without them.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::{fetch_page, sort_direction, substring_pattern},
    model::product::{CreateProductParam, Product, ProductScope, UpdateProductParam},
    util::pagination::ListParams,
};

/// Repository providing database operations for the product catalog.
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProductRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product and its images in a single transaction.
    ///
    /// # Arguments
    /// - `param` - Product fields and image URLs in display order
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product with images
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(param.name),
            price: ActiveValue::Set(param.price),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            sell: ActiveValue::Set(param.sell),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let images = insert_images(&txn, entity.id, param.images).await?;

        txn.commit().await?;

        Product::from_entity(entity, images)
    }

    /// Finds a product by ID with its images.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Product found
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, DbErr> {
        let Some(entity) = entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut products = with_images(self.db, vec![entity]).await?;

        Ok(products.pop())
    }

    /// Finds every product whose ID is in `product_ids`, in ID order.
    ///
    /// IDs with no matching product are skipped.
    pub async fn find_by_ids(&self, product_ids: &[i32]) -> Result<Vec<Product>, DbErr> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(product_ids.to_vec()))
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        with_images(self.db, entities).await
    }

    /// Applies a partial update; a supplied image list replaces the stored one.
    ///
    /// # Arguments
    /// - `product_id` - ID of the product to update
    /// - `param` - Fields to change; `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated product
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        product_id: i32,
        param: UpdateProductParam,
    ) -> Result<Option<Product>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Product::find_by_id(product_id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(category) = param.category {
            active.category = ActiveValue::Set(category.as_str().to_string());
        }
        if let Some(sell) = param.sell {
            active.sell = ActiveValue::Set(sell);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(&txn).await?;

        if let Some(images) = param.images {
            entity::prelude::ProductImage::delete_many()
                .filter(entity::product_image::Column::ProductId.eq(product_id))
                .exec(&txn)
                .await?;
            insert_images(&txn, product_id, images).await?;
        }

        let mut products = with_images(&txn, vec![entity]).await?;

        txn.commit().await?;

        Ok(products.pop())
    }

    /// Deletes a product; images and cart lines cascade, order items keep their snapshot.
    ///
    /// # Returns
    /// - `Ok(true)` - Product deleted
    /// - `Ok(false)` - No product with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, product_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_by_id(product_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets products with pagination.
    ///
    /// The search matches name or description case-insensitively, and the total
    /// counts products matching the same scope and search.
    ///
    /// # Arguments
    /// - `scope` - Whether to include products that are off sale
    /// - `params` - Sort, page and search parameters
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products for the requested page and the number matching
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        scope: ProductScope,
        params: &ListParams,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let pattern = substring_pattern(&params.search);
        let mut condition = Condition::all().add(
            Condition::any()
                .add(entity::product::Column::Name.like(pattern.clone()))
                .add(entity::product::Column::Description.like(pattern)),
        );
        if scope == ProductScope::OnSale {
            condition = condition.add(entity::product::Column::Sell.eq(true));
        }

        let direction = sort_direction(params);
        let query = entity::prelude::Product::find()
            .filter(condition)
            .order_by(sort_column(&params.sort_by), direction.clone())
            .order_by(entity::product::Column::Id, direction);

        let (entities, total) = fetch_page(self.db, query, params).await?;
        let products = with_images(self.db, entities).await?;

        Ok((products, total))
    }
}

fn sort_column(sort_by: &str) -> entity::product::Column {
    use entity::product::Column;

    match sort_by {
        "name" => Column::Name,
        "price" => Column::Price,
        "category" => Column::Category,
        "sell" => Column::Sell,
        "updatedAt" => Column::UpdatedAt,
        _ => Column::CreatedAt,
    }
}

async fn insert_images<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
    urls: Vec<String>,
) -> Result<Vec<entity::product_image::Model>, DbErr> {
    let mut images = Vec::with_capacity(urls.len());
    for url in urls {
        let image = entity::product_image::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            url: ActiveValue::Set(url),
            ..Default::default()
        }
        .insert(db)
        .await?;
        images.push(image);
    }
    Ok(images)
}

/// Attaches images to each product, preserving the order of `entities`.
async fn with_images<C: ConnectionTrait>(
    db: &C,
    entities: Vec<entity::product::Model>,
) -> Result<Vec<Product>, DbErr> {
    if entities.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
    let rows = entity::prelude::ProductImage::find()
        .filter(entity::product_image::Column::ProductId.is_in(ids))
        .order_by_asc(entity::product_image::Column::Id)
        .all(db)
        .await?;

    let mut by_product: HashMap<i32, Vec<entity::product_image::Model>> = HashMap::new();
    for row in rows {
        by_product.entry(row.product_id).or_default().push(row);
    }

    entities
        .into_iter()
        .map(|e| {
            let images = by_product.remove(&e.id).unwrap_or_default();
            Product::from_entity(e, images)
        })
        .collect()
}
