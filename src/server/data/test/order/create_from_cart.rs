use super::*;

/// Tests placing an order writes its items and empties the cart.
///
/// Expected: Ok(Order) with the snapshot items, and an empty cart afterwards
#[tokio::test]
async fn writes_items_and_clears_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, line) = factory::helpers::create_user_with_cart(db, 2).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create_from_cart(
            pickup(user.id, "Pickup Person"),
            vec![OrderItem {
                product_id: Some(product.id),
                name: product.name.clone(),
                price: product.price,
                quantity: 2,
            }],
            &[line.id],
        )
        .await?;

    assert_eq!(order.user_id, user.id);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_id, Some(product.id));
    assert_eq!(order.total(), i64::from(product.price) * 2);
    assert!(CartRepository::new(db).get_lines(user.id).await?.is_empty());

    Ok(())
}

/// Tests that only the ordering user's cart is cleared.
///
/// Expected: Ok with the other user's cart untouched
#[tokio::test]
async fn leaves_other_carts_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (buyer, product, line) = factory::helpers::create_user_with_cart(db, 1).await?;
    let (other, _, _) = factory::helpers::create_user_with_cart(db, 3).await?;

    OrderRepository::new(db)
        .create_from_cart(
            pickup(buyer.id, "Buyer"),
            vec![OrderItem {
                product_id: Some(product.id),
                name: product.name.clone(),
                price: product.price,
                quantity: 1,
            }],
            &[line.id],
        )
        .await?;

    assert_eq!(CartRepository::new(db).total_quantity(other.id).await?, 3);

    Ok(())
}

/// Tests that a line added to the cart after the snapshot is not removed.
///
/// Expected: Ok with only the later line left in the cart
#[tokio::test]
async fn keeps_lines_added_after_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, line) = factory::helpers::create_user_with_cart(db, 2).await?;
    let later = factory::create_product(db).await?;
    factory::create_cart_item(db, user.id, later.id, 5).await?;

    let order = OrderRepository::new(db)
        .create_from_cart(
            pickup(user.id, "Pickup Person"),
            vec![OrderItem {
                product_id: Some(product.id),
                name: product.name.clone(),
                price: product.price,
                quantity: 2,
            }],
            &[line.id],
        )
        .await?;

    assert_eq!(order.items.len(), 1);
    let remaining = CartRepository::new(db).get_lines(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].product_id, later.id);
    assert_eq!(remaining[0].quantity, 5);

    Ok(())
}
