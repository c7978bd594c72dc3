use super::*;

/// Expected: Ok(true), then the product is gone
#[tokio::test]
async fn deletes_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;

    let repo = ProductRepository::new(db);

    assert!(repo.delete(product.id).await?);
    assert!(repo.find_by_id(product.id).await?.is_none());

    Ok(())
}

/// Expected: Ok(false) for an unknown ID
#[tokio::test]
async fn returns_false_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    assert!(!repo.delete(3).await?);

    Ok(())
}
