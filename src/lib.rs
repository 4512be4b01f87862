//! Room booking backend: rooms and bookings in SQLite behind a small JSON API.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mapping;
pub mod message;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use message::{DisabledGenerator, GeminiGenerator, MessageGenerator, TicketMessage};
pub use routes::{api_routes, app, common_routes};
pub use service::{BookingService, RoomService};
pub use state::AppState;
pub use store::{connect, ensure_tables};
