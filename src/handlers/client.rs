//! Client handlers: add, get, show. Each checks token scopes before touching storage.

use crate::auth::{SCOPE_READ, SCOPE_WRITE};
use crate::error::AppError;
use crate::extractors::BearerToken;
use crate::model::AddClientBody;
use crate::response::{created, success_many, success_one};
use crate::service::{ClientStore, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

/// POST /client/:ClientID
pub async fn add(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(client_id): Path<String>,
    body: Result<Json<AddClientBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(client_id = %client_id, "client.add started");
    state.tokens.authorize(&token, &[SCOPE_WRITE])?;
    let Json(body) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let client = body.into_client(client_id);
    RequestValidator::validate(&client)?;
    ClientStore::create(&state.pool, &client).await.map_err(|e| {
        tracing::warn!(client_id = %client.client_id, error = %e, "client.add failed");
        e
    })?;
    tracing::info!(client_id = %client.client_id, "client.add completed");
    Ok(created())
}

/// GET /client/:ClientID
pub async fn get(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(client_id = %client_id, "client.get started");
    state.tokens.authorize(&token, &[SCOPE_READ])?;
    let client = ClientStore::get(&state.pool, &client_id)
        .await?
        .ok_or_else(|| AppError::not_found(client_id.clone()))?;
    tracing::info!(client_id = %client_id, "client.get completed");
    Ok(success_one(client))
}

/// GET /client
pub async fn show(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("client.show started");
    state.tokens.authorize(&token, &[SCOPE_READ])?;
    let clients = ClientStore::list(&state.pool).await?;
    tracing::info!(count = clients.len(), "client.show completed");
    Ok(success_many(clients))
}
