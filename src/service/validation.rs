//! Request validation for client payloads.

use crate::error::AppError;
use crate::model::Client;
use regex::Regex;
use std::sync::OnceLock;

const MAX_ID_LENGTH: usize = 128;
const MAX_TEXT_LENGTH: usize = 256;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"))
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a client before insert. ClientID and ClientName are required.
    pub fn validate(client: &Client) -> Result<(), AppError> {
        required("ClientID", &client.client_id, MAX_ID_LENGTH)?;
        required("ClientName", &client.client_name, MAX_TEXT_LENGTH)?;
        if let Some(name) = &client.contact_name {
            max_length("ContactName", name, MAX_TEXT_LENGTH)?;
        }
        if let Some(email) = &client.contact_email {
            max_length("ContactEmail", email, MAX_TEXT_LENGTH)?;
            if !email_pattern().is_match(email) {
                return Err(AppError::Validation("ContactEmail must be a valid email".into()));
            }
        }
        if let Some(mobile) = client.contact_mobile {
            if mobile < 0 {
                return Err(AppError::Validation("ContactMobile must not be negative".into()));
            }
        }
        Ok(())
    }
}

fn required(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    max_length(field, value, max)
}

fn max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
