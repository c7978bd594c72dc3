use super::*;

/// Tests creating a product with several images.
///
/// Expected: Ok(Product) with images in the order supplied
#[tokio::test]
async fn creates_product_with_ordered_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(create_param("Cheesecake", &["https://img/2.png", "https://img/1.png"]))
        .await?;

    assert_eq!(product.name, "Cheesecake");
    assert_eq!(product.category, ProductCategory::Popular);
    assert_eq!(product.images, vec!["https://img/2.png", "https://img/1.png"]);

    let found = repo.find_by_id(product.id).await?.unwrap();
    assert_eq!(found, product);

    Ok(())
}

/// Tests that `find_by_ids` skips unknown IDs.
///
/// Expected: Ok with only the stored products, in ID order
#[tokio::test]
async fn find_by_ids_skips_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_product(db).await?;
    let b = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let products = repo.find_by_ids(&[b.id, 999, a.id]).await?;

    let ids: Vec<_> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

/// Tests that an unknown stored category surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_stored_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .category("seasonal")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let result = repo.find_by_id(product.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
