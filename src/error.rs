//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("room '{0}' does not exist")]
    UnknownRoom(String),
}

impl AppError {
    /// Message sent to the client. Store errors carry the raw driver message.
    pub fn message(&self) -> String {
        match self {
            AppError::Db(sqlx::Error::Database(e)) => e.message().to_string(),
            AppError::Db(e) => e.to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.message();
        tracing::warn!(error = %self, "request failed");
        (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
    }
}
