//! Booking handlers: list, create, delete.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::models::{Booking, NewBooking};
use crate::response::{created, deleted, Created, Deleted};
use crate::service::BookingService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /api/bookings: newest first, nested room and student.
pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = BookingService::list(&state.pool).await?;
    Ok(Json(bookings))
}

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewBooking>,
) -> Result<Json<Created<Booking>>, AppError> {
    let booking = BookingService::create(&state.pool, state.messages.as_ref(), new).await?;
    tracing::info!(booking_id = %booking.id, room_id = %booking.room.id, "booking created");
    Ok(created("Booking created", booking))
}

/// DELETE /api/bookings/:id
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, AppError> {
    let changes = BookingService::delete(&state.pool, &id).await?;
    Ok(deleted("Booking deleted", changes))
}
