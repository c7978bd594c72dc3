use super::*;

/// Tests a partial update.
///
/// Verifies that only supplied fields change and `updated_at` moves forward.
///
/// Expected: Ok(Some(User)) with the new name and the old phone
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Before")
        .phone("0911111111")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .update(
            created.id,
            UpdateUserParam {
                name: Some("After".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(user.name, "After");
    assert_eq!(user.phone, "0911111111");
    assert!(user.updated_at >= created.updated_at);

    Ok(())
}

/// Tests the admin-only fields.
///
/// Expected: Ok(Some(User)) promoted and blacklisted with a reason
#[tokio::test]
async fn updates_role_and_blacklist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .update(
            created.id,
            UpdateUserParam {
                role: Some(UserRole::Admin),
                blacklist: Some(true),
                blacklist_reason: Some("Unpaid pickup".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(user.is_admin());
    assert!(user.blacklist);
    assert_eq!(user.blacklist_reason, "Unpaid pickup");

    Ok(())
}

/// Expected: Ok(None) when the user does not exist
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .update(999, UpdateUserParam::avatar("https://img/a.png".to_string()))
        .await?;

    assert!(user.is_none());

    Ok(())
}
