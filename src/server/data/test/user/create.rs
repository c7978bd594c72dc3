use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user with the regular role, no avatar
/// and a clear blacklist.
///
/// Expected: Ok(User) with default role and flags
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            account: "buyer@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Buyer".to_string(),
            phone: "0912345678".to_string(),
        })
        .await?;

    assert_eq!(user.account, "buyer@example.com");
    assert_eq!(user.password_hash, "hash");
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.avatar, None);
    assert!(!user.blacklist);
    assert_eq!(user.blacklist_reason, "");
    assert_eq!(user.created_at, user.updated_at);

    Ok(())
}

/// Tests that accounts are unique.
///
/// Expected: Err(DbErr) reported as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .account("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            account: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Second".to_string(),
            phone: "0912345678".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
