//! Load config from environment variables (after `.env`, if the binary loaded one).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_TOKEN_TTL_SECS: &str = "TOKEN_TTL_SECS";
pub const ENV_AUTH_USERNAME: &str = "AUTH_USERNAME";
pub const ENV_AUTH_PASSWORD: &str = "AUTH_PASSWORD";
pub const ENV_MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";

/// Build config from the process environment. Unset keys fall back to defaults.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Build config from an arbitrary key lookup, then validate it.
pub fn load_from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = AppConfig::default();
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let jwt_secret = match get(ENV_JWT_SECRET) {
        Some(secret) => secret,
        None => {
            tracing::warn!("{} not set, using the built-in development signing key", ENV_JWT_SECRET);
            defaults.auth.jwt_secret
        }
    };

    let config = AppConfig {
        database_url: get(ENV_DATABASE_URL).unwrap_or(defaults.database_url),
        bind_addr: get(ENV_BIND_ADDR).unwrap_or(defaults.bind_addr),
        max_body_bytes: parse_or(ENV_MAX_BODY_BYTES, get(ENV_MAX_BODY_BYTES), defaults.max_body_bytes)?,
        auth: AuthConfig {
            jwt_secret,
            token_ttl_secs: parse_or(ENV_TOKEN_TTL_SECS, get(ENV_TOKEN_TTL_SECS), defaults.auth.token_ttl_secs)?,
            credentials: Credentials {
                username: get(ENV_AUTH_USERNAME).unwrap_or(defaults.auth.credentials.username),
                password: get(ENV_AUTH_PASSWORD).unwrap_or(defaults.auth.credentials.password),
            },
        },
    };
    validate(&config)?;
    Ok(config)
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(s) => s.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
        }),
    }
}
