//! Response envelopes for create and delete.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Created<T> {
    pub message: &'static str,
    pub data: T,
}

#[derive(Serialize)]
pub struct Deleted {
    pub message: &'static str,
    /// Rows removed; 0 when the id did not exist.
    pub changes: u64,
}

pub fn created<T: Serialize>(message: &'static str, data: T) -> Json<Created<T>> {
    Json(Created { message, data })
}

pub fn deleted(message: &'static str, changes: u64) -> Json<Deleted> {
    Json(Deleted { message, changes })
}
