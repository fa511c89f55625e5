//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, util::jwt::TokenManager};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenManager` only holds the signing keys and token lifetime
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs login tokens and verifies the `token` cookie on incoming requests.
    pub tokens: TokenManager,
}

impl AppState {
    /// Creates a new application state from the database pool and configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration providing the JWT secret and expiry
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: TokenManager::new(&config.jwt_secret_key, config.jwt_expire_seconds),
        }
    }
}
