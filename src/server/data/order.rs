//! Order data repository for database operations.
//!
//! Placing an order writes the order, its item snapshots and removes the ordered
//! cart lines in one transaction.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::{fetch_page, sort_direction, substring_pattern},
    model::order::{CreateOrderParam, Order, OrderItem},
    util::pagination::ListParams,
};

/// Repository providing database operations for orders.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes an order with its items and removes the cart lines they came from.
    ///
    /// Only the lines named in `cart_line_ids` are removed, so a line added to the
    /// cart after the snapshot was taken stays for a later order. All writes share
    /// a transaction; if any fails nothing is kept.
    ///
    /// # Arguments
    /// - `param` - Customer and pickup details
    /// - `items` - Item snapshots, in cart order
    /// - `cart_line_ids` - IDs of the cart lines the items were taken from
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its items
    /// - `Err(DbErr)` - Database error, the transaction is rolled back
    pub async fn create_from_cart(
        &self,
        param: CreateOrderParam,
        items: Vec<OrderItem>,
        cart_line_ids: &[i32],
    ) -> Result<Order, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            date: ActiveValue::Set(param.date),
            time: ActiveValue::Set(param.time),
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(param.phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let row = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(item.product_id),
                name: ActiveValue::Set(item.name),
                price: ActiveValue::Set(item.price),
                quantity: ActiveValue::Set(item.quantity),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            rows.push(row);
        }

        entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::UserId.eq(param.user_id))
            .filter(entity::cart_item::Column::Id.is_in(cart_line_ids.iter().copied()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Order::from_entity(order, rows))
    }

    /// Gets a customer's orders, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - Orders with their items
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        with_items(self.db, entities).await
    }

    /// Gets all orders with pagination, searching on the pickup name.
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders for the requested page and the number matching
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, params: &ListParams) -> Result<(Vec<Order>, u64), DbErr> {
        let direction = sort_direction(params);
        let query = entity::prelude::Order::find()
            .filter(entity::order::Column::Name.like(substring_pattern(&params.search)))
            .order_by(sort_column(&params.sort_by), direction.clone())
            .order_by(entity::order::Column::Id, direction);

        let (entities, total) = fetch_page(self.db, query, params).await?;
        let orders = with_items(self.db, entities).await?;

        Ok((orders, total))
    }
}

fn sort_column(sort_by: &str) -> entity::order::Column {
    use entity::order::Column;

    match sort_by {
        "date" => Column::Date,
        "name" => Column::Name,
        "updatedAt" => Column::UpdatedAt,
        _ => Column::CreatedAt,
    }
}

/// Attaches item rows to each order, preserving the order of `entities`.
async fn with_items<C: ConnectionTrait>(
    db: &C,
    entities: Vec<entity::order::Model>,
) -> Result<Vec<Order>, DbErr> {
    if entities.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
    let rows = entity::prelude::OrderItem::find()
        .filter(entity::order_item::Column::OrderId.is_in(ids))
        .order_by_asc(entity::order_item::Column::Id)
        .all(db)
        .await?;

    let mut by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
    for row in rows {
        by_order.entry(row.order_id).or_default().push(row);
    }

    Ok(entities
        .into_iter()
        .map(|e| {
            let items = by_order.remove(&e.id).unwrap_or_default();
            Order::from_entity(e, items)
        })
        .collect())
}
