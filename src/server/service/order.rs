//! Order placement and listings.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cart::CartRepository, order::OrderRepository, product::ProductRepository},
    error::{validation::ValidationError, AppError},
    model::order::{CreateOrderParam, Order, OrderItem, PaginatedOrders},
    util::pagination::ListParams,
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order from the customer's current cart.
    ///
    /// Each cart line becomes an item carrying the product's current name and price.
    /// The ordered lines leave the cart in the same transaction that writes the order.
    ///
    /// # Returns
    /// - `Ok(Order)` - The placed order
    /// - `Err(AppError::ValidationErr(EmptyCart))` - Nothing to order
    /// - `Err(AppError::NotFound)` - A cart product no longer exists
    pub async fn place(&self, param: CreateOrderParam) -> Result<Order, AppError> {
        let lines = CartRepository::new(self.db).get_lines(param.user_id).await?;
        if lines.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }

        let product_ids: Vec<i32> = lines.iter().map(|l| l.product_id).collect();
        let products = ProductRepository::new(self.db)
            .find_by_ids(&product_ids)
            .await?;

        let items = lines
            .iter()
            .map(|line| {
                let product = products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
                Ok(OrderItem {
                    product_id: Some(product.id),
                    name: product.name.clone(),
                    price: product.price,
                    quantity: line.quantity,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let line_ids: Vec<i32> = lines.iter().map(|l| l.id).collect();
        let order = OrderRepository::new(self.db)
            .create_from_cart(param, items, &line_ids)
            .await?;

        tracing::info!(
            "User {} placed order {} with {} item(s)",
            order.user_id,
            order.id,
            order.items.len()
        );

        Ok(order)
    }

    /// The customer's own orders, newest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_paginated(&self, params: &ListParams) -> Result<PaginatedOrders, AppError> {
        let (orders, total) = OrderRepository::new(self.db).get_paginated(params).await?;

        Ok(PaginatedOrders { orders, total })
    }
}
