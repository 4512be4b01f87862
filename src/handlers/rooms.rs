//! Room handlers: list, create, delete.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::models::Room;
use crate::response::{created, deleted, Created, Deleted};
use crate::service::RoomService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /api/rooms
pub async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = RoomService::list(&state.pool).await?;
    Ok(Json(rooms))
}

/// POST /api/rooms
pub async fn create_room(
    State(state): State<AppState>,
    ApiJson(room): ApiJson<Room>,
) -> Result<Json<Created<Room>>, AppError> {
    RoomService::create(&state.pool, &room).await?;
    tracing::info!(room_id = %room.id, "room created");
    Ok(created("Room created", room))
}

/// DELETE /api/rooms/:id
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, AppError> {
    let changes = RoomService::delete(&state.pool, &id).await?;
    Ok(deleted("Room deleted", changes))
}
