//! Shared application state for all routes.

use crate::auth::TokenService;
use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Signing key, token lifetime, and signin credentials.
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &AppConfig) -> Self {
        AppState {
            pool,
            tokens: Arc::new(TokenService::new(&config.auth)),
        }
    }
}
