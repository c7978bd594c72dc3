use super::*;

/// Tests the on-sale scope hides products that are off sale, in rows and total.
///
/// Expected: Ok with only the on-sale product and total 1
#[tokio::test]
async fn on_sale_scope_hides_unsold() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let on_sale = factory::create_product(db).await?;
    factory::product::ProductFactory::new(db)
        .sell(false)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let (products, total) = repo
        .get_paginated(ProductScope::OnSale, &ListParams::default())
        .await?;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, on_sale.id);
    assert_eq!(total, 1);

    let (all, all_total) = repo
        .get_paginated(ProductScope::All, &ListParams::default())
        .await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all_total, 2);

    Ok(())
}

/// Tests search matches name or description, ignoring case.
///
/// Expected: Ok with the name match and the description match
#[tokio::test]
async fn searches_name_and_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let by_name = factory::product::ProductFactory::new(db)
        .name("Matcha Roll")
        .description("Sponge cake")
        .build()
        .await?;
    let by_description = factory::product::ProductFactory::new(db)
        .name("Latte")
        .description("Made with MATCHA powder")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .name("Brownie")
        .description("Chocolate")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let (products, total) = repo
        .get_paginated(
            ProductScope::All,
            &ListQuery {
                search: Some("matcha".to_string()),
                sort_by: Some("name".to_string()),
                sort_order: Some("1".to_string()),
                ..Default::default()
            }
            .into_params(),
        )
        .await?;

    let ids: Vec<_> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![by_description.id, by_name.id]);
    assert_eq!(total, 2);

    Ok(())
}

/// Tests sorting by price with pagination.
///
/// Expected: Ok with the two most expensive products on page 1 of size 2
#[tokio::test]
async fn sorts_by_price_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for price in [50, 300, 120] {
        factory::product::ProductFactory::new(db)
            .price(price)
            .build()
            .await?;
    }

    let repo = ProductRepository::new(db);
    let (products, total) = repo
        .get_paginated(
            ProductScope::OnSale,
            &ListQuery {
                sort_by: Some("price".to_string()),
                sort_order: Some("-1".to_string()),
                items_per_page: Some("2".to_string()),
                ..Default::default()
            }
            .into_params(),
        )
        .await?;

    let prices: Vec<_> = products.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![300, 120]);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests a page number far past the end, large enough to overflow the offset.
///
/// Expected: Ok with no rows and the real total
#[tokio::test]
async fn huge_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_product(db).await?;
    factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    for (page, items_per_page) in [
        ("9223372036854775807", "20"),
        ("2", "9223372036854775807"),
        ("3", "1"),
    ] {
        let (products, total) = repo
            .get_paginated(
                ProductScope::OnSale,
                &ListQuery {
                    page: Some(page.to_string()),
                    items_per_page: Some(items_per_page.to_string()),
                    ..Default::default()
                }
                .into_params(),
            )
            .await?;

        assert!(products.is_empty(), "page {} of size {}", page, items_per_page);
        assert_eq!(total, 2);
    }

    Ok(())
}

/// Tests that `%` and `_` in a search match literally.
///
/// Expected: Ok with only the product whose name contains the literal characters
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let discounted = factory::product::ProductFactory::new(db)
        .name("Tart 20% off")
        .build()
        .await?;
    let snake = factory::product::ProductFactory::new(db)
        .name("mochi_box")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .name("Mochi Box")
        .description("Plain")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let search = |term: &str| ListQuery {
        search: Some(term.to_string()),
        ..Default::default()
    }
    .into_params();

    let (products, total) = repo
        .get_paginated(ProductScope::All, &search("%"))
        .await?;
    assert_eq!(total, 1);
    assert_eq!(products[0].id, discounted.id);

    let (products, total) = repo
        .get_paginated(ProductScope::All, &search("mochi_"))
        .await?;
    assert_eq!(total, 1);
    assert_eq!(products[0].id, snake.id);

    Ok(())
}
