use super::*;

/// Tests listing a customer's orders.
///
/// Expected: Ok with the customer's orders newest first, excluding other customers
#[tokio::test]
async fn returns_own_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let product = factory::create_product(db).await?;

    let older = factory::create_order(db, user.id, &[(&product, 1)]).await?;
    let newer = factory::create_order(db, user.id, &[(&product, 2)]).await?;
    factory::create_order(db, other.id, &[(&product, 1)]).await?;

    let orders = OrderRepository::new(db).get_by_user(user.id).await?;

    let ids: Vec<_> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(orders[0].items[0].quantity, 2);

    Ok(())
}

/// Tests that order items outlive their product.
///
/// Expected: Ok with the item's product reference cleared but its snapshot intact
#[tokio::test]
async fn keeps_snapshot_after_product_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .name("Retired Cake")
        .price(90)
        .build()
        .await?;
    factory::create_order(db, user.id, &[(&product, 3)]).await?;

    crate::server::data::product::ProductRepository::new(db)
        .delete(product.id)
        .await?;

    let orders = OrderRepository::new(db).get_by_user(user.id).await?;
    let item = &orders[0].items[0];

    assert_eq!(item.product_id, None);
    assert_eq!(item.name, "Retired Cake");
    assert_eq!(item.price, 90);
    assert_eq!(orders[0].total(), 270);

    Ok(())
}
