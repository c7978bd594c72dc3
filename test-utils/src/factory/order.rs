//! Order factory for seeding placed orders.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an order for the user holding one line per given product.
///
/// Line name and price are copied from the product, matching what order
/// placement stores.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Customer placing the order
/// - `lines` - Products with the quantity ordered
///
/// # Returns
/// - `Ok(entity::order::Model)` - Created order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    lines: &[(&entity::product::Model, i32)],
) -> Result<entity::order::Model, DbErr> {
    let now = Utc::now();
    let date = NaiveDate::from_ymd_opt(2026, 3, 14)
        .ok_or_else(|| DbErr::Custom("invalid pickup date".to_string()))?;

    let order = entity::order::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        date: ActiveValue::Set(date),
        time: ActiveValue::Set("14:00".to_string()),
        name: ActiveValue::Set("Pickup Name".to_string()),
        phone: ActiveValue::Set("0912345678".to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for (product, quantity) in lines {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(order.id),
            product_id: ActiveValue::Set(Some(product.id)),
            name: ActiveValue::Set(product.name.clone()),
            price: ActiveValue::Set(product.price),
            quantity: ActiveValue::Set(*quantity),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(order)
}
