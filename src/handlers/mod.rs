//! HTTP handlers for client management and signin.

pub mod client;
pub mod signin;
pub use client::*;
pub use signin::*;
