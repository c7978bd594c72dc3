//! Cart line factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a cart line for the given user and product.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Cart owner
/// - `product_id` - Product in the cart
/// - `quantity` - Line quantity
///
/// # Returns
/// - `Ok(entity::cart_item::Model)` - Created cart line
/// - `Err(DbErr)` - Database error during insert
pub async fn create_cart_item(
    db: &DatabaseConnection,
    user_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<entity::cart_item::Model, DbErr> {
    entity::cart_item::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        product_id: ActiveValue::Set(product_id),
        quantity: ActiveValue::Set(quantity),
        ..Default::default()
    }
    .insert(db)
    .await
}
