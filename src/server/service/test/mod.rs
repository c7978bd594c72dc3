use test_utils::{builder::TestBuilder, factory};

use crate::server::error::{auth::AuthError, validation::ValidationError, AppError};


const SECRET: &str = "service_test_secret";

fn assert_auth_err<T: std::fmt::Debug>(result: Result<T, AppError>, expected: AuthError) {
    match result {
        Err(AppError::AuthErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

fn assert_validation_err<T: std::fmt::Debug>(result: Result<T, AppError>, expected: ValidationError) {
    match result {
        Err(AppError::ValidationErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

fn assert_not_found<T: std::fmt::Debug>(result: Result<T, AppError>, message: &str) {
    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, message),
        other => panic!("expected not found, got {:?}", other),
    }
}
