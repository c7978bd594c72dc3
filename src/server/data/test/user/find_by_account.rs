use super::*;

/// Expected: Ok(Some(User)) for a registered account
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .account("someone@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_account("someone@example.com").await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Expected: Ok(None) for an unknown account
#[tokio::test]
async fn returns_none_for_unknown_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_account("nobody@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
