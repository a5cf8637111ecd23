//! ClientStore: persistence for clients. RequestValidator: payload checks before writes.

mod crud;
mod validation;
pub use crud::ClientStore;
pub use validation::RequestValidator;
