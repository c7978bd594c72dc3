use super::*;

/// Expected: Ok(5) for lines of 2 and 3
#[tokio::test]
async fn sums_line_quantities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_user_with_cart(db, 2).await?;
    let other_product = factory::create_product(db).await?;
    factory::create_cart_item(db, user.id, other_product.id, 3).await?;

    let repo = CartRepository::new(db);

    assert_eq!(repo.total_quantity(user.id).await?, 5);

    Ok(())
}

/// Expected: Ok(0) for an empty cart
#[tokio::test]
async fn empty_cart_is_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = CartRepository::new(db);

    assert_eq!(repo.total_quantity(user.id).await?, 0);

    Ok(())
}

/// Tests that deleting a product drops it from carts.
///
/// Expected: Ok(0) after the only product in the cart is deleted
#[tokio::test]
async fn deleted_product_leaves_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, _) = factory::helpers::create_user_with_cart(db, 4).await?;

    crate::server::data::product::ProductRepository::new(db)
        .delete(product.id)
        .await?;

    let repo = CartRepository::new(db);

    assert_eq!(repo.total_quantity(user.id).await?, 0);

    Ok(())
}
