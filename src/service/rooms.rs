//! Room persistence.

use crate::error::AppError;
use crate::mapping::{availability_column, room_from_row, RoomRow};
use crate::models::Room;
use sqlx::SqlitePool;

pub struct RoomService;

impl RoomService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Room>, AppError> {
        let sql = "SELECT id, name, capacity, location, isAvailable FROM rooms";
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<RoomRow> = sqlx::query_as(sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(room_from_row).collect())
    }

    pub async fn get(pool: &SqlitePool, id: &str) -> Result<Option<Room>, AppError> {
        let sql = "SELECT id, name, capacity, location, isAvailable FROM rooms WHERE id = ?";
        tracing::debug!(sql = %sql, id = %id, "query");
        let row: Option<RoomRow> = sqlx::query_as(sql).bind(id).fetch_optional(pool).await?;
        Ok(row.map(room_from_row))
    }

    /// Insert with the client's id. A duplicate id fails on the primary key.
    pub async fn create(pool: &SqlitePool, room: &Room) -> Result<(), AppError> {
        let sql = "INSERT INTO rooms (id, name, capacity, location, isAvailable) VALUES (?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, id = %room.id, "query");
        sqlx::query(sql)
            .bind(&room.id)
            .bind(&room.name)
            .bind(room.capacity)
            .bind(&room.location)
            .bind(availability_column(room.is_available))
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Returns the number of rows removed. Bookings that reference the room are left in place.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<u64, AppError> {
        let sql = "DELETE FROM rooms WHERE id = ?";
        tracing::debug!(sql = %sql, id = %id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected())
    }
}
