//! Row shapes: flat SQL rows to and from the nested wire representation.

use crate::models::{Booking, BookingStatus, Room, Student};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct RoomRow {
    pub id: String,
    pub name: String,
    pub capacity: i64,
    pub location: String,
    /// Stored as INTEGER 0/1.
    pub is_available: Option<i64>,
}

/// One row of `bookings JOIN rooms`.
#[derive(Debug, Clone, FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct BookingRow {
    pub id: String,
    pub room_id: String,
    pub student_name: String,
    pub student_nim: String,
    pub pdb_class: String,
    pub subject: Option<String>,
    pub contact: Option<String>,
    pub date: String,
    pub time_slot: String,
    pub timestamp: Option<i64>,
    pub status: Option<String>,
    pub ai_message: Option<String>,
    pub room_name: String,
    pub room_capacity: i64,
    pub room_location: String,
    pub room_is_available: Option<i64>,
}

/// Column values for `INSERT INTO bookings`, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingColumns<'a> {
    pub id: &'a str,
    pub room_id: &'a str,
    pub student_name: &'a str,
    pub student_nim: &'a str,
    pub pdb_class: &'a str,
    pub subject: &'a str,
    pub contact: &'a str,
    pub date: &'a str,
    pub time_slot: &'a str,
    pub timestamp: Option<i64>,
    pub status: &'static str,
    pub ai_message: Option<&'a str>,
}

fn availability(stored: Option<i64>) -> bool {
    // NULL means the column default (available).
    stored.map_or(true, |v| v != 0)
}

pub fn availability_column(is_available: bool) -> i64 {
    i64::from(is_available)
}

fn status_from_stored(stored: Option<&str>) -> BookingStatus {
    match stored {
        None | Some("APPROVED") => BookingStatus::Approved,
        Some(other) => {
            tracing::warn!(status = %other, "unexpected stored booking status; reporting APPROVED");
            BookingStatus::Approved
        }
    }
}

pub fn room_from_row(row: RoomRow) -> Room {
    Room {
        id: row.id,
        name: row.name,
        capacity: row.capacity,
        location: row.location,
        is_available: availability(row.is_available),
    }
}

pub fn booking_from_row(row: BookingRow) -> Booking {
    let status = status_from_stored(row.status.as_deref());
    Booking {
        id: row.id,
        room: Room {
            id: row.room_id,
            name: row.room_name,
            capacity: row.room_capacity,
            location: row.room_location,
            is_available: availability(row.room_is_available),
        },
        student: Student {
            name: row.student_name,
            nim: row.student_nim,
            pdb_class: row.pdb_class,
            subject: row.subject.unwrap_or_default(),
            contact: row.contact.unwrap_or_default(),
        },
        date: row.date,
        time_slot: row.time_slot,
        timestamp: row.timestamp,
        status,
        ai_message: row.ai_message,
    }
}

/// Denormalize a booking into its table columns. Only the room id is stored.
pub fn booking_columns(booking: &Booking) -> BookingColumns<'_> {
    BookingColumns {
        id: &booking.id,
        room_id: &booking.room.id,
        student_name: &booking.student.name,
        student_nim: &booking.student.nim,
        pdb_class: &booking.student.pdb_class,
        subject: &booking.student.subject,
        contact: &booking.student.contact,
        date: &booking.date,
        time_slot: &booking.time_slot,
        timestamp: booking.timestamp,
        status: booking.status.as_str(),
        ai_message: booking.ai_message.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_row() -> BookingRow {
        BookingRow {
            id: "B1".into(),
            room_id: "R1".into(),
            student_name: "Sari".into(),
            student_nim: "2201".into(),
            pdb_class: "PDB-A".into(),
            subject: Some("Basis Data".into()),
            contact: Some("0812".into()),
            date: "2026-10-20".into(),
            time_slot: "08:00 - 10:00".into(),
            timestamp: Some(1_760_000_000_000),
            status: Some("APPROVED".into()),
            ai_message: Some("Gas terus!".into()),
            room_name: "Lab 8.01".into(),
            room_capacity: 40,
            room_location: "Gedung Nano Lantai 8".into(),
            room_is_available: Some(1),
        }
    }

    #[test]
    fn room_row_coerces_integer_availability() {
        let row = |v| RoomRow {
            id: "R1".into(),
            name: "Lab".into(),
            capacity: 10,
            location: "L8".into(),
            is_available: v,
        };
        assert!(room_from_row(row(Some(1))).is_available);
        assert!(!room_from_row(row(Some(0))).is_available);
        assert!(room_from_row(row(None)).is_available);
    }

    #[test]
    fn booking_row_nests_room_and_student() {
        let booking = booking_from_row(booking_row());
        assert_eq!(booking.room.id, "R1");
        assert_eq!(booking.room.name, "Lab 8.01");
        assert_eq!(booking.room.capacity, 40);
        assert!(booking.room.is_available);
        assert_eq!(booking.student.nim, "2201");
        assert_eq!(booking.student.subject, "Basis Data");
        assert_eq!(booking.status, BookingStatus::Approved);
        assert_eq!(booking.ai_message.as_deref(), Some("Gas terus!"));
    }

    #[test]
    fn legacy_row_without_subject_reads_empty() {
        let mut row = booking_row();
        row.subject = None;
        row.contact = None;
        row.status = None;
        let booking = booking_from_row(row);
        assert_eq!(booking.student.subject, "");
        assert_eq!(booking.student.contact, "");
        assert_eq!(booking.status, BookingStatus::Approved);
    }

    #[test]
    fn columns_flatten_what_rows_nest() {
        let booking = booking_from_row(booking_row());
        let cols = booking_columns(&booking);
        assert_eq!(cols.room_id, "R1");
        assert_eq!(cols.student_name, "Sari");
        assert_eq!(cols.pdb_class, "PDB-A");
        assert_eq!(cols.subject, "Basis Data");
        assert_eq!(cols.status, "APPROVED");
        assert_eq!(cols.ai_message, Some("Gas terus!"));
        assert_eq!(availability_column(false), 0);
    }
}
