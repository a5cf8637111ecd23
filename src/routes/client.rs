//! Client routes: add and get by id, list all.

use crate::handlers::client::{add, get as get_handler, show};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn client_routes(state: AppState) -> Router {
    Router::new()
        .route("/client", get(show))
        .route("/client/:client_id", get(get_handler).post(add))
        .with_state(state)
}
