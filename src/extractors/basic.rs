//! Extract HTTP basic credentials for signin.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

const BASIC_PREFIX: &str = "Basic ";

/// Username and password decoded from `Authorization: Basic <base64(user:pass)>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("missing basic credentials"))?;
        parse_basic(value)
    }
}

fn parse_basic(value: &str) -> Result<BasicCredentials, AppError> {
    let malformed = || AppError::unauthorized("malformed basic credentials");
    let encoded = match value.trim().get(..BASIC_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BASIC_PREFIX) => value.trim()[BASIC_PREFIX.len()..].trim(),
        _ => return Err(malformed()),
    };
    let decoded = STANDARD.decode(encoded).map_err(|_| malformed())?;
    let decoded = String::from_utf8(decoded).map_err(|_| malformed())?;
    let (username, password) = decoded.split_once(':').ok_or_else(malformed)?;
    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
