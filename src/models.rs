//! Wire types for rooms and bookings (camelCase JSON, as the frontend expects).

use serde::{Deserialize, Deserializer, Serialize};

fn default_available() -> bool {
    true
}

/// Missing and `null` strings both read as `""`.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub capacity: i64,
    pub location: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub nim: String,
    pub pdb_class: String,
    /// Mata kuliah. Rows written before this column existed read back empty.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub contact: String,
}

/// Students pick a free room directly, so every booking is approved on creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Approved,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Approved => "APPROVED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub room: Room,
    pub student: Student,
    pub date: String,
    pub time_slot: String,
    /// Epoch milliseconds. Legacy rows may lack it.
    pub timestamp: Option<i64>,
    pub status: BookingStatus,
    pub ai_message: Option<String>,
}

/// Only the id of the nested room is read on booking creation.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub id: String,
    pub room: RoomRef,
    pub student: Student,
    pub date: String,
    pub time_slot: String,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub ai_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn room_availability_defaults_to_true() {
        let room: Room = serde_json::from_value(json!({
            "id": "R1", "name": "Lab 8.01", "capacity": 40, "location": "Lantai 8"
        }))
        .unwrap();
        assert!(room.is_available);
    }

    #[test]
    fn new_booking_accepts_full_room_and_minimal_student() {
        let booking: NewBooking = serde_json::from_value(json!({
            "id": "B1",
            "room": {"id": "R1", "name": "Lab 8.01", "capacity": 40, "location": "Lantai 8", "isAvailable": true},
            "student": {"name": "Sari", "nim": "123", "pdbClass": "PDB-A", "contact": null},
            "date": "2026-10-20",
            "timeSlot": "08:00 - 10:00"
        }))
        .unwrap();
        assert_eq!(booking.room.id, "R1");
        assert_eq!(booking.student.subject, "");
        assert_eq!(booking.student.contact, "");
        assert_eq!(booking.status, BookingStatus::Approved);
        assert!(booking.timestamp.is_none());
        assert!(booking.ai_message.is_none());
    }

    #[test]
    fn status_other_than_approved_is_rejected() {
        let result = serde_json::from_value::<NewBooking>(json!({
            "id": "B1",
            "room": {"id": "R1"},
            "student": {"name": "Sari", "nim": "123", "pdbClass": "PDB-A"},
            "date": "2026-10-20",
            "timeSlot": "08:00 - 10:00",
            "status": "PENDING"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn booking_serializes_in_camel_case() {
        let booking = Booking {
            id: "B1".into(),
            room: Room {
                id: "R1".into(),
                name: "Lab".into(),
                capacity: 30,
                location: "Lantai 8".into(),
                is_available: true,
            },
            student: Student {
                name: "Sari".into(),
                nim: "123".into(),
                pdb_class: "PDB-A".into(),
                subject: "Basis Data".into(),
                contact: String::new(),
            },
            date: "2026-10-20".into(),
            time_slot: "08:00 - 10:00".into(),
            timestamp: Some(1),
            status: BookingStatus::Approved,
            ai_message: None,
        };
        let v = serde_json::to_value(&booking).unwrap();
        assert_eq!(v["timeSlot"], "08:00 - 10:00");
        assert_eq!(v["student"]["pdbClass"], "PDB-A");
        assert_eq!(v["room"]["isAvailable"], true);
        assert_eq!(v["status"], "APPROVED");
        assert!(v["aiMessage"].is_null());
    }
}
