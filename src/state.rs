//! Shared application state for all routes. Built once at startup and cloned into each request.

use crate::message::MessageGenerator;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Fills in `aiMessage` for bookings created without one.
    pub messages: Arc<dyn MessageGenerator>,
}

impl AppState {
    pub fn new(pool: SqlitePool, messages: Arc<dyn MessageGenerator>) -> Self {
        Self { pool, messages }
    }
}
