//! Room and booking persistence against SQLite.

mod bookings;
mod rooms;
pub use bookings::BookingService;
pub use rooms::RoomService;
