use super::*;

/// Tests replacing a token keeps its position.
///
/// Expected: Ok(true) with the new token in the middle slot
#[tokio::test]
async fn replaces_token_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for token in ["a", "b", "c"] {
        factory::create_user_token(db, user.id, token).await?;
    }

    let repo = UserTokenRepository::new(db);
    let replaced = repo.replace(user.id, "b", "b2").await?;

    assert!(replaced);
    assert_eq!(repo.get_by_user(user.id).await?, vec!["a", "b2", "c"]);

    Ok(())
}

/// Tests replacing a token that is no longer stored.
///
/// Expected: Ok(false) and the stored tokens unchanged
#[tokio::test]
async fn returns_false_when_token_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_user_token(db, user.id, "a").await?;

    let repo = UserTokenRepository::new(db);
    let replaced = repo.replace(user.id, "gone", "new").await?;

    assert!(!replaced);
    assert_eq!(repo.get_by_user(user.id).await?, vec!["a"]);

    Ok(())
}

/// Tests that another user's token cannot be replaced.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_other_users_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_user_token(db, owner.id, "shared").await?;

    let repo = UserTokenRepository::new(db);

    assert!(!repo.replace(other.id, "shared", "stolen").await?);
    assert_eq!(repo.get_by_user(owner.id).await?, vec!["shared"]);

    Ok(())
}
