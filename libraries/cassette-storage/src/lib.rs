//! Cassette Storage
//!
//! Local persistence for Cassette.
//!
//! This crate provides:
//! - The Durable Store: an embedded, versioned `SQLite` database named
//!   `musicDatabase` holding uploaded audio in the `musicFiles` collection
//! - Snapshot Stores: small synchronous key-value stores scoped to a session
//!
//! # Architecture
//!
//! - **Injected handle**: open the store once with [`MusicDatabase::open`] and
//!   share it as `Arc<dyn MusicStore>`; components never open it themselves
//! - **Vertical Slicing**: `music_files` owns its queries
//! - **Versioned schema**: `PRAGMA user_version` tracks the store version
//!
//! # Example
//!
//! ```rust,no_run
//! use cassette_core::{MusicStore, NewAudioEntry};
//! use cassette_storage::MusicDatabase;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = MusicDatabase::open("sqlite://./data/musicDatabase.db").await?;
//!
//! let key = db.add(NewAudioEntry::new("song.mp3", "data:audio/mpeg;base64,AAAA")).await?;
//! let entries = db.get_all().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod database;
mod error;

// Vertical slices
pub mod music_files;

// Session state
pub mod session;

pub use database::{database_url, initialize_schema, schema_version, MusicDatabase};
pub use error::StorageError;
pub use session::{FileSessionStore, MemorySessionStore};

use sqlx::sqlite::SqlitePool;

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://musicDatabase.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}
