//! Cart line repository.
//!
//! Cart lines are kept in insertion order by primary key; quantity changes update
//! the existing row so a line never moves.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::cart::CartLine;

pub struct CartRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's cart lines in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<CartLine>)` - Cart lines, empty when the cart is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_lines(&self, user_id: i32) -> Result<Vec<CartLine>, DbErr> {
        let entities = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .order_by_asc(entity::cart_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CartLine::from_entity).collect())
    }

    /// Finds the user's line for a product, if the product is in the cart.
    pub async fn find_line(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<CartLine>, DbErr> {
        let entity = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .filter(entity::cart_item::Column::ProductId.eq(product_id))
            .one(self.db)
            .await?;

        Ok(entity.map(CartLine::from_entity))
    }

    /// Appends a new line to the end of the cart.
    pub async fn add_line(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartLine, DbErr> {
        let entity = entity::cart_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            product_id: ActiveValue::Set(product_id),
            quantity: ActiveValue::Set(quantity),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CartLine::from_entity(entity))
    }

    /// Sets the quantity of an existing line in place.
    ///
    /// # Returns
    /// - `Ok(())` - Quantity updated, or the line no longer exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_quantity(&self, line_id: i32, quantity: i32) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::CartItem::find_by_id(line_id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active = entity.into_active_model();
        active.quantity = ActiveValue::Set(quantity);
        active.update(self.db).await?;

        Ok(())
    }

    pub async fn remove_line(&self, line_id: i32) -> Result<(), DbErr> {
        entity::prelude::CartItem::delete_by_id(line_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sum of quantities across the user's cart.
    pub async fn total_quantity(&self, user_id: i32) -> Result<i64, DbErr> {
        let lines = self.get_lines(user_id).await?;

        Ok(lines.iter().map(|l| i64::from(l.quantity)).sum())
    }
}
