use super::*;

/// Tests searching on pickup name.
///
/// Expected: Ok with the matching order only and total 1
#[tokio::test]
async fn searches_pickup_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, _) = factory::helpers::create_user_with_cart(db, 1).await?;
    let item = || OrderItem {
        product_id: Some(product.id),
        name: product.name.clone(),
        price: product.price,
        quantity: 1,
    };

    let repo = OrderRepository::new(db);
    let wanted = repo
        .create_from_cart(pickup(user.id, "Wang Xiaoming"), vec![item()], &[])
        .await?;
    repo.create_from_cart(pickup(user.id, "Lin Meili"), vec![item()], &[])
        .await?;

    let (orders, total) = repo
        .get_paginated(
            &ListQuery {
                search: Some("wang".to_string()),
                ..Default::default()
            }
            .into_params(),
        )
        .await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, wanted.id);
    assert_eq!(total, 1);

    Ok(())
}

/// Expected: Ok with every order and a matching total
#[tokio::test]
async fn lists_all_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        factory::create_order(db, user.id, &[(&product, 1)]).await?;
    }

    let (orders, total) = OrderRepository::new(db)
        .get_paginated(&ListParams::default())
        .await?;

    assert_eq!(orders.len(), 3);
    assert_eq!(total, 3);

    Ok(())
}
