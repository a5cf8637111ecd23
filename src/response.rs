//! Success response helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn created() -> StatusCode {
    StatusCode::CREATED
}

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
