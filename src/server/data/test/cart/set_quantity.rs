use super::*;

/// Tests updating a line in place.
///
/// Expected: Ok with the new quantity and the line still first
#[tokio::test]
async fn updates_quantity_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, line) = factory::helpers::create_user_with_cart(db, 1).await?;
    let later = factory::create_product(db).await?;
    factory::create_cart_item(db, user.id, later.id, 2).await?;

    let repo = CartRepository::new(db);
    repo.set_quantity(line.id, 5).await?;

    let lines = repo.get_lines(user.id).await?;
    assert_eq!(lines[0].product_id, product.id);
    assert_eq!(lines[0].quantity, 5);
    assert_eq!(lines[1].product_id, later.id);

    Ok(())
}

/// Tests removing a line.
///
/// Expected: Ok with an empty cart
#[tokio::test]
async fn removes_line() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, line) = factory::helpers::create_user_with_cart(db, 1).await?;

    let repo = CartRepository::new(db);
    repo.remove_line(line.id).await?;

    assert!(repo.get_lines(user.id).await?.is_empty());
    assert!(repo.find_line(user.id, product.id).await?.is_none());

    Ok(())
}
