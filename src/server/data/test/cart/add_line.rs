use super::*;

/// Tests lines come back in insertion order.
///
/// Expected: Ok with lines ordered as added
#[tokio::test]
async fn keeps_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;

    let repo = CartRepository::new(db);
    repo.add_line(user.id, second.id, 1).await?;
    repo.add_line(user.id, first.id, 3).await?;

    let lines = repo.get_lines(user.id).await?;
    let products: Vec<_> = lines.iter().map(|l| (l.product_id, l.quantity)).collect();
    assert_eq!(products, vec![(second.id, 1), (first.id, 3)]);

    Ok(())
}
