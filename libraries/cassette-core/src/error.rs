/// Core error types for Cassette
use thiserror::Error;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// Durable Store failures, one variant per request kind
#[derive(Error, Debug)]
pub enum StoreError {
    /// The embedded engine could not be opened (unavailable, or blocked by a version conflict)
    #[error("Failed to open store: {0}")]
    Open(String),

    /// A read request failed
    #[error("Failed to read from store: {0}")]
    Read(String),

    /// A write request failed (e.g. quota or disk exhausted)
    #[error("Failed to write to store: {0}")]
    Write(String),
}

impl StoreError {
    /// Create an open error
    pub fn open(msg: impl Into<String>) -> Self {
        Self::Open(msg.into())
    }

    /// Create a read error
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    /// Create a write error
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}
