//! Core types for playback control

use cassette_core::SNAPSHOT_KEY;
use serde::{Deserialize, Serialize};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing selected
    Idle,

    /// A track is loaded and paused
    Paused,

    /// A track is loaded and playing
    Playing,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Start playing a restored track on mount (default: true)
    pub resume_playing: bool,

    /// Snapshot Store key (default: `audioPlaylistState`)
    pub snapshot_key: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            resume_playing: true,
            snapshot_key: SNAPSHOT_KEY.to_string(),
        }
    }
}
