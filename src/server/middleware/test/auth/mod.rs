use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, BearerToken, Permission},
    service::token::TokenService,
};

mod require_admin;

const SECRET: &str = "middleware_test_secret";

fn bearer(token: &str, path: &str) -> BearerToken {
    BearerToken {
        token: token.to_string(),
        path: path.to_string(),
    }
}

fn assert_auth_err(result: Result<impl std::fmt::Debug, AppError>, expected: AuthError) {
    match result {
        Err(AppError::AuthErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
