use super::*;
use crate::server::data::user_token::UserTokenRepository;

/// Tests deleting a user removes their tokens too.
///
/// Expected: Ok(true) and no tokens left for the user
#[tokio::test]
async fn deletes_user_and_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::create_user_token(db, user.id, "token-a").await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(UserTokenRepository::new(db)
        .get_by_user(user.id)
        .await?
        .is_empty());

    Ok(())
}

/// Expected: Ok(false) when nothing was deleted
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
