//! Playback Events
//!
//! Event-based communication for UI synchronization. The controller queues
//! events as its state changes; the presentation layer drains them and
//! re-renders.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged { state: PlaybackState },

    /// A different playlist entry was loaded
    TrackChanged {
        index: usize,
        file_name: String,
        previous_index: Option<usize>,
    },

    /// Current time moved (seek, track change, progress report)
    PositionChanged { seconds: f64 },

    /// Duration of the loaded source became known
    DurationChanged { seconds: f64 },

    /// The element refused to start; the controller is paused
    StartRejected { reason: String },
}
