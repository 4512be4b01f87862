//! Booking persistence. Listing joins rooms; creation checks the room and fills defaults.

use crate::error::AppError;
use crate::mapping::{booking_columns, booking_from_row, BookingRow};
use crate::message::MessageGenerator;
use crate::models::{Booking, NewBooking};
use crate::service::RoomService;
use sqlx::SqlitePool;

const LIST_SQL: &str = r#"
SELECT
    b.id, b.roomId, b.studentName, b.studentNim, b.pdbClass, b.subject, b.contact,
    b.date, b.timeSlot, b.timestamp, b.status, b.aiMessage,
    r.name AS roomName, r.capacity AS roomCapacity, r.location AS roomLocation,
    r.isAvailable AS roomIsAvailable
FROM bookings b
JOIN rooms r ON b.roomId = r.id
ORDER BY b.timestamp DESC
"#;

const INSERT_SQL: &str = r#"
INSERT INTO bookings (
    id, roomId, studentName, studentNim, pdbClass, subject, contact, date, timeSlot, timestamp, status, aiMessage
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

pub struct BookingService;

impl BookingService {
    /// Newest first. Bookings whose room no longer exists are not listed.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Booking>, AppError> {
        tracing::debug!(sql = %LIST_SQL, "query");
        let rows: Vec<BookingRow> = sqlx::query_as(LIST_SQL).fetch_all(pool).await?;
        Ok(rows.into_iter().map(booking_from_row).collect())
    }

    /// Store a booking for an existing room. A missing timestamp becomes now (epoch ms);
    /// a missing `aiMessage` is asked of `messages`, which always yields some text.
    pub async fn create(
        pool: &SqlitePool,
        messages: &dyn MessageGenerator,
        new: NewBooking,
    ) -> Result<Booking, AppError> {
        let room = RoomService::get(pool, &new.room.id)
            .await?
            .ok_or_else(|| AppError::UnknownRoom(new.room.id.clone()))?;

        let ai_message = match new.ai_message {
            Some(text) => text,
            None => messages
                .ticket_message(&new.student.name, &new.student.pdb_class, &room.name)
                .await
                .into_text(),
        };

        let booking = Booking {
            id: new.id,
            room,
            student: new.student,
            date: new.date,
            time_slot: new.time_slot,
            timestamp: Some(new.timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp_millis())),
            status: new.status,
            ai_message: Some(ai_message),
        };

        let cols = booking_columns(&booking);
        tracing::debug!(sql = %INSERT_SQL, id = %cols.id, room_id = %cols.room_id, "query");
        sqlx::query(INSERT_SQL)
            .bind(cols.id)
            .bind(cols.room_id)
            .bind(cols.student_name)
            .bind(cols.student_nim)
            .bind(cols.pdb_class)
            .bind(cols.subject)
            .bind(cols.contact)
            .bind(cols.date)
            .bind(cols.time_slot)
            .bind(cols.timestamp)
            .bind(cols.status)
            .bind(cols.ai_message)
            .execute(pool)
            .await?;
        Ok(booking)
    }

    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<u64, AppError> {
        let sql = "DELETE FROM bookings WHERE id = ?";
        tracing::debug!(sql = %sql, id = %id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected())
    }
}
