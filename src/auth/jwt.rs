//! HS256 token issuance and validation.
//!
//! Every signin yields the same scope set; client routes require one of those
//! scopes. Signature, structure, and expiry failures are `Unauthorized`; a
//! token that verifies but lacks the required scopes is `InvalidScopes`.

use crate::config::{AuthConfig, Credentials, MAX_TOKEN_TTL_SECS};
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SCOPE_READ: &str = "api:read";
pub const SCOPE_WRITE: &str = "api:write";
pub const SIGNIN_SCOPES: [&str; 2] = [SCOPE_READ, SCOPE_WRITE];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub scopes: Vec<String>,
}

/// Claims as found on the wire. `scopes` stays untyped so a missing or
/// malformed claim is reported as a scope failure, not a decode failure.
#[derive(Deserialize)]
struct RawClaims {
    #[serde(default)]
    iat: Option<i64>,
    #[serde(default)]
    nbf: Option<i64>,
    exp: i64,
    #[serde(default)]
    scopes: Option<Value>,
}

pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    credentials: Credentials,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .field("username", &self.credentials.username)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        TokenService {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: Duration::seconds(config.token_ttl_secs.min(MAX_TOKEN_TTL_SECS) as i64),
            credentials: config.credentials.clone(),
        }
    }

    /// Both username and password must match the configured pair.
    pub fn check_credentials(&self, username: &str, password: &str) -> Result<(), AppError> {
        if username != self.credentials.username || password != self.credentials.password {
            tracing::warn!(username = %username, "signin rejected");
            return Err(AppError::unauthorized("invalid username and password combination"));
        }
        Ok(())
    }

    pub fn claims_at(&self, now: DateTime<Utc>) -> Claims {
        let issued = now.timestamp();
        Claims {
            iat: issued,
            nbf: issued,
            exp: (now + self.ttl).timestamp(),
            scopes: SIGNIN_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Sign a fresh token valid from now for the configured lifetime.
    pub fn issue(&self) -> Result<String, AppError> {
        self.sign(&self.claims_at(Utc::now()))
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding)?)
    }

    /// Verify `token` and require every scope in `required`.
    pub fn authorize(&self, token: &str, required: &[&str]) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_nbf = true;

        let raw = decode::<RawClaims>(token, &self.decoding, &validation)
            .map_err(|e| {
                tracing::warn!(error = %e, "token rejected");
                AppError::unauthorized("invalid token")
            })?
            .claims;

        let scopes = parse_scopes(raw.scopes)?;
        if let Some(missing) = required.iter().find(|r| !scopes.iter().any(|s| s == *r)) {
            return Err(AppError::InvalidScopes(format!("missing required scope {}", missing)));
        }
        Ok(Claims {
            iat: raw.iat.unwrap_or_default(),
            nbf: raw.nbf.unwrap_or_default(),
            exp: raw.exp,
            scopes,
        })
    }
}

fn parse_scopes(value: Option<Value>) -> Result<Vec<String>, AppError> {
    let Some(Value::Array(items)) = value else {
        return Err(AppError::InvalidScopes("invalid scopes in token".into()));
    };
    items
        .into_iter()
        .map(|v| match v {
            Value::String(s) => Ok(s),
            _ => Err(AppError::InvalidScopes("invalid scopes in token".into())),
        })
        .collect()
}
