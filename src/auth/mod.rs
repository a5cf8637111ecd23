//! Signin credentials, token issuance, and scope checks.

mod jwt;
pub use jwt::{Claims, TokenService, SCOPE_READ, SCOPE_WRITE, SIGNIN_SCOPES};
