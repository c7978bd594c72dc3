use super::*;

/// Tests a field-only update keeps the images.
///
/// Expected: Ok(Some(Product)) with the new price and the existing images
#[tokio::test]
async fn keeps_images_when_none_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let created = repo.create(create_param("Tart", &["https://img/a.png"])).await?;

    let updated = repo
        .update(
            created.id,
            UpdateProductParam {
                price: Some(80),
                sell: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 80);
    assert!(!updated.sell);
    assert_eq!(updated.name, "Tart");
    assert_eq!(updated.images, vec!["https://img/a.png"]);

    Ok(())
}

/// Tests a supplied image list replaces the stored one.
///
/// Expected: Ok(Some(Product)) with only the new images
#[tokio::test]
async fn replaces_images_when_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let created = repo
        .create(create_param("Tart", &["https://img/a.png", "https://img/b.png"]))
        .await?;

    let updated = repo
        .update(
            created.id,
            UpdateProductParam {
                images: Some(vec!["https://img/c.png".to_string()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.images, vec!["https://img/c.png"]);
    assert_eq!(
        repo.find_by_id(created.id).await?.unwrap().images,
        vec!["https://img/c.png"]
    );

    Ok(())
}

/// Expected: Ok(None) when the product does not exist
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo
        .update(
            7,
            UpdateProductParam {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
