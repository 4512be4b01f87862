//! Room and booking routes under /api.

use crate::handlers::{create_booking, create_room, delete_booking, delete_room, list_bookings, list_rooms};
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/rooms", get(list_rooms).post(create_room))
        .route("/api/rooms/:id", delete(delete_room))
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/:id", delete(delete_booking))
        .with_state(state)
}
