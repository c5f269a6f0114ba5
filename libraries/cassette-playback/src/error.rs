//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Navigation on a playlist with no entries
    #[error("Playlist is empty")]
    PlaylistEmpty,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// The playback element refused to start the loaded source
    #[error("Playback start rejected: {0}")]
    StartRejected(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
