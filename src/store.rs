//! SQLite pool construction and table DDL. Tables are created if missing; there are no versioned migrations.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const ROOMS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS rooms (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    capacity INTEGER NOT NULL,
    location TEXT NOT NULL,
    isAvailable INTEGER DEFAULT 1
)"#;

const BOOKINGS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS bookings (
    id TEXT PRIMARY KEY,
    roomId TEXT NOT NULL,
    studentName TEXT NOT NULL,
    studentNim TEXT NOT NULL,
    pdbClass TEXT NOT NULL,
    subject TEXT,
    contact TEXT,
    date TEXT NOT NULL,
    timeSlot TEXT NOT NULL,
    timestamp INTEGER,
    status TEXT DEFAULT 'APPROVED',
    aiMessage TEXT,
    FOREIGN KEY (roomId) REFERENCES rooms (id)
)"#;

/// Columns added to `bookings` after its first release: (name, type).
const LATE_BOOKING_COLUMNS: &[(&str, &str)] = &[("subject", "TEXT")];

/// Open a pool on `database_url`, creating the database file if it does not exist.
/// Foreign keys stay unenforced, so deleting a room never touches its bookings.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    if max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DATABASE_MAX_CONNECTIONS",
            value: max_connections.to_string(),
        }
        .into());
    }
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: database_url.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(database_url = %database_url, "connected to SQLite");
    Ok(pool)
}

/// Private in-memory database. A single connection that is never recycled keeps the data alive.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create `rooms` and `bookings` if missing, then add any late columns an older `bookings` table lacks.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(ROOMS_DDL).execute(pool).await?;
    sqlx::query(BOOKINGS_DDL).execute(pool).await?;

    let existing: Vec<(String,)> = sqlx::query_as("SELECT name FROM pragma_table_info('bookings')")
        .fetch_all(pool)
        .await?;
    for (column, type_) in LATE_BOOKING_COLUMNS {
        if existing.iter().any(|(name,)| name == column) {
            continue;
        }
        tracing::info!(column = %column, "adding missing column to bookings");
        sqlx::query(&format!("ALTER TABLE bookings ADD COLUMN {} {}", column, type_))
            .execute(pool)
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn columns(pool: &SqlitePool, table: &str) -> Vec<String> {
        let rows: Vec<(String,)> = sqlx::query_as(&format!("SELECT name FROM pragma_table_info('{}')", table))
            .fetch_all(pool)
            .await
            .unwrap();
        rows.into_iter().map(|(n,)| n).collect()
    }

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let pool = connect_in_memory().await.unwrap();
        ensure_tables(&pool).await.unwrap();
        ensure_tables(&pool).await.unwrap();

        let rooms = columns(&pool, "rooms").await;
        assert_eq!(rooms, ["id", "name", "capacity", "location", "isAvailable"]);
        let bookings = columns(&pool, "bookings").await;
        assert!(bookings.iter().any(|c| c == "subject"));
        assert!(bookings.iter().any(|c| c == "aiMessage"));
    }

    #[tokio::test]
    async fn legacy_bookings_table_gains_subject_column() {
        let pool = connect_in_memory().await.unwrap();
        sqlx::query(
            "CREATE TABLE bookings (
                id TEXT PRIMARY KEY, roomId TEXT NOT NULL, studentName TEXT NOT NULL,
                studentNim TEXT NOT NULL, pdbClass TEXT NOT NULL, contact TEXT,
                date TEXT NOT NULL, timeSlot TEXT NOT NULL, timestamp INTEGER,
                status TEXT DEFAULT 'APPROVED', aiMessage TEXT
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        assert!(!columns(&pool, "bookings").await.iter().any(|c| c == "subject"));

        ensure_tables(&pool).await.unwrap();
        assert!(columns(&pool, "bookings").await.iter().any(|c| c == "subject"));
    }

    #[tokio::test]
    async fn zero_pool_size_is_a_config_error() {
        let err = connect("sqlite::memory:", 0).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. })
        ));
    }

    #[tokio::test]
    async fn invalid_url_is_a_config_error() {
        let err = connect("sqlite://bookings.db?mode=bogus", 1).await.unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid { key: "DATABASE_URL", .. })));
    }
}
