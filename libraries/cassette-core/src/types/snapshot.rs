/// Playback snapshot persisted in the Snapshot Store
use serde::{Deserialize, Serialize};

/// Persisted playback position
///
/// `currently_playing_index` is `-1` when nothing is selected. It is a position
/// in the playlist ordering, not a stable identifier, so a consumer must call
/// [`PlaybackSnapshot::index_within`] before using it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    pub currently_playing_index: i64,
    pub current_time: f64,
}

impl PlaybackSnapshot {
    /// Sentinel for "no selection"
    pub const NO_SELECTION: i64 = -1;

    pub fn new(index: Option<usize>, current_time: f64) -> Self {
        Self {
            currently_playing_index: index.map_or(Self::NO_SELECTION, |i| i as i64),
            current_time: if current_time.is_finite() {
                current_time.max(0.0)
            } else {
                0.0
            },
        }
    }

    /// The stored index if it addresses a playlist of `len` entries
    #[must_use]
    pub fn index_within(&self, len: usize) -> Option<usize> {
        usize::try_from(self.currently_playing_index)
            .ok()
            .filter(|&i| i < len)
    }

    /// Stored time, with anything negative or non-finite read as zero
    #[must_use]
    pub fn time(&self) -> f64 {
        if self.current_time.is_finite() && self.current_time > 0.0 {
            self.current_time
        } else {
            0.0
        }
    }
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self {
            currently_playing_index: Self::NO_SELECTION,
            current_time: 0.0,
        }
    }
}
