//! Route tables for client, signin, and operational endpoints.

mod client;
mod common;
mod signin;

pub use client::client_routes;
pub use common::common_routes;
pub use signin::signin_routes;
