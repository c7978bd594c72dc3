//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user whose cart holds one line of a freshly created product.
///
/// # Arguments
/// - `db` - Database connection
/// - `quantity` - Quantity of the cart line
///
/// # Returns
/// - `Ok((user, product, cart_item))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_cart(
    db: &DatabaseConnection,
    quantity: i32,
) -> Result<
    (
        entity::user::Model,
        entity::product::Model,
        entity::cart_item::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let product = crate::factory::product::create_product(db).await?;
    let item = crate::factory::cart_item::create_cart_item(db, user.id, product.id, quantity).await?;

    Ok((user, product, item))
}
