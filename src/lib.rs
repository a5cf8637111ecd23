//! Clients API: client management REST service with JWT signin, backed by SQLite.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use auth::{Claims, TokenService};
pub use config::{load_from_env, AppConfig};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Client, Creds};
pub use routes::{client_routes, common_routes, signin_routes};
pub use service::ClientStore;
pub use state::AppState;
pub use store::{connect, ensure_database_exists};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// API mount point for client and signin routes.
pub const API_PREFIX: &str = "/api/v1";

/// Full router: common routes at the root, client and signin routes under `/api/v1`.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    let api = Router::new()
        .merge(client_routes(state.clone()))
        .merge(signin_routes(state.clone()));

    Router::new()
        .merge(common_routes(state))
        .nest(API_PREFIX, api)
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(max_body_bytes)))
}
