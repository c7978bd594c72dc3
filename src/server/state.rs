//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection is a
//! pool handle, the token keys are small, and the image store wraps a `reqwest::Client`.

use sea_orm::DatabaseConnection;

use crate::server::service::{image_store::CloudinaryStore, token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Signs and verifies bearer tokens.
    pub tokens: TokenService,

    /// Destination for uploaded product images and avatars.
    pub image_store: CloudinaryStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, image_store: CloudinaryStore) -> Self {
        Self {
            db,
            tokens,
            image_store,
        }
    }
}
