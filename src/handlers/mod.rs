//! HTTP handlers for rooms and bookings.

pub mod bookings;
pub mod rooms;
pub use bookings::*;
pub use rooms::*;
