//! Config validation: values that would make the server unusable are rejected at startup.

use crate::config::{AppConfig, MAX_TOKEN_TTL_SECS};
use crate::error::ConfigError;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.database_url.is_empty() {
        return Err(ConfigError::Validation("database url must not be empty".into()));
    }
    if config.auth.jwt_secret.is_empty() {
        return Err(ConfigError::Validation("jwt secret must not be empty".into()));
    }
    if config.auth.token_ttl_secs == 0 {
        return Err(ConfigError::Validation("token ttl must be greater than zero".into()));
    }
    if config.auth.token_ttl_secs > MAX_TOKEN_TTL_SECS {
        return Err(ConfigError::Validation(format!(
            "token ttl must be at most {} seconds",
            MAX_TOKEN_TTL_SECS
        )));
    }
    let creds = &config.auth.credentials;
    if creds.username.is_empty() || creds.password.is_empty() {
        return Err(ConfigError::Validation("signin credentials must not be empty".into()));
    }
    if creds.username.contains(':') {
        return Err(ConfigError::Validation("signin username must not contain ':'".into()));
    }
    if config.max_body_bytes == 0 {
        return Err(ConfigError::Validation("max body bytes must be greater than zero".into()));
    }
    Ok(())
}
