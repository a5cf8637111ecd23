//! Signin handler: trade basic credentials for a signed token.

use crate::error::AppError;
use crate::extractors::BasicCredentials;
use crate::model::Creds;
use crate::response::success_one;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// POST /signin/authenticate
pub async fn authenticate(
    State(state): State<AppState>,
    creds: BasicCredentials,
) -> Result<impl IntoResponse, AppError> {
    state.tokens.check_credentials(&creds.username, &creds.password)?;
    let jwt = state.tokens.issue()?;
    tracing::info!("user '{}' logged in", creds.username);
    Ok(success_one(Creds { jwt }))
}
