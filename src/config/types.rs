//! Runtime configuration: database, listener, and signin/token settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Token lifetime: 9 minutes from issuance.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 9 * 60;
/// Upper bound accepted for `token_ttl_secs` (one day).
pub const MAX_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Upper bound on request body size.
    pub max_body_bytes: usize,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing key shared by issuance and validation.
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub credentials: Credentials,
}

/// The single username/password pair accepted by signin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            auth: AuthConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            jwt_secret: "secret".into(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            credentials: Credentials::default(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials {
            username: "gopher".into(),
            password: "academy".into(),
        }
    }
}
