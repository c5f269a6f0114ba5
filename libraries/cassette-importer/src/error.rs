//! Error types for the upload pipeline

use cassette_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Upload attempted before the Durable Store finished opening
    #[error("Store not initialized")]
    StoreNotReady,

    /// A file with this name is already stored
    #[error("{0} is already uploaded")]
    Duplicate(String),

    /// The file is not audio
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The file content could not be read
    #[error("Error reading {file_name}: {source}")]
    Decode {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// The upload task itself died
    #[error("Upload task failed: {0}")]
    Task(String),
}

impl ImportError {
    /// Non-fatal problems that only skip a single file
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}
