use super::*;

/// Expected: Ok(AuthenticatedUser) for an admin
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let admin = factory::user::create_admin(db).await?;
    let token = tokens.mint(admin.id, Duration::days(14))?;
    factory::create_user_token(db, admin.id, token.clone()).await?;

    let bearer = bearer(&token, "/users/all");
    let auth = AuthGuard::new(db, &tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    assert!(auth.user.is_admin());

    Ok(())
}

/// Expected: Err(AuthError::AccessDenied) for a regular user
#[tokio::test]
async fn denies_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let user = factory::create_user(db).await?;
    let token = tokens.mint(user.id, Duration::days(14))?;
    factory::create_user_token(db, user.id, token.clone()).await?;

    let bearer = bearer(&token, "/users/all");
    let result = AuthGuard::new(db, &tokens, &bearer)
        .require(&[Permission::Admin])
        .await;

    assert_auth_err(result, AuthError::AccessDenied(user.id));

    Ok(())
}
