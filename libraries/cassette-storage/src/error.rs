/// Storage-specific errors
use cassette_core::StoreError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Stored schema is newer than this build understands
    #[error("Store version {found} is newer than supported version {supported}")]
    VersionConflict { found: i64, supported: i64 },

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Convert into the core error for an open request
    pub fn into_open(self) -> StoreError {
        StoreError::open(self.to_string())
    }

    /// Convert into the core error for a read request
    pub fn into_read(self) -> StoreError {
        StoreError::read(self.to_string())
    }

    /// Convert into the core error for a write request
    pub fn into_write(self) -> StoreError {
        StoreError::write(self.to_string())
    }
}
