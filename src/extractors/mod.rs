//! Request extractors for signin credentials and bearer tokens.

pub mod basic;
pub mod bearer;

pub use basic::BasicCredentials;
pub use bearer::BearerToken;
