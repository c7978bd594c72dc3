use super::*;

/// Tests logout removes every copy of the token and nothing else.
///
/// Expected: Ok(2) with only the other token left
#[tokio::test]
async fn removes_all_matching_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for token in ["dup", "keep", "dup"] {
        factory::create_user_token(db, user.id, token).await?;
    }

    let repo = UserTokenRepository::new(db);
    let removed = repo.delete(user.id, "dup").await?;

    assert_eq!(removed, 2);
    assert_eq!(repo.get_by_user(user.id).await?, vec!["keep"]);

    Ok(())
}

/// Expected: Ok(0) when the token is not stored
#[tokio::test]
async fn removes_nothing_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserTokenRepository::new(db);

    assert_eq!(repo.delete(user.id, "missing").await?, 0);

    Ok(())
}
