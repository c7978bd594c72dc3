use super::*;

/// Tests that tokens append in issue order and are scoped to their user.
///
/// Expected: Ok with both tokens listed in order, and `exists` only for the owner
#[tokio::test]
async fn appends_tokens_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = UserTokenRepository::new(db);
    repo.create(user.id, "first").await?;
    repo.create(user.id, "second").await?;

    assert_eq!(repo.get_by_user(user.id).await?, vec!["first", "second"]);
    assert!(repo.exists(user.id, "first").await?);
    assert!(!repo.exists(other.id, "first").await?);
    assert!(!repo.exists(user.id, "third").await?);

    Ok(())
}
