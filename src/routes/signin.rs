//! Signin route: exchange basic credentials for a token.

use crate::handlers::signin::authenticate;
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn signin_routes(state: AppState) -> Router {
    Router::new()
        .route("/signin/authenticate", post(authenticate))
        .with_state(state)
}
