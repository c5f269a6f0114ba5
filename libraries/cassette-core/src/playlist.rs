//! Playlist loader
//!
//! The playlist is derived, never stored: it is whatever a full read of the
//! Durable Store returns, in store order.

use crate::storage::MusicStore;
use crate::types::{Route, StoredAudioEntry};

/// Ordered entries read from the Durable Store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<StoredAudioEntry>,
}

impl Playlist {
    pub fn new(entries: Vec<StoredAudioEntry>) -> Self {
        Self { entries }
    }

    /// Load every stored entry
    ///
    /// A failed read is logged and produces an empty playlist, which the
    /// presentation layer shows as the "no songs found" state.
    pub async fn load(store: &dyn MusicStore) -> Self {
        match store.get_all().await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "Loaded playlist");
                Self { entries }
            }
            Err(e) => {
                tracing::error!("Error retrieving audio files: {}", e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StoredAudioEntry> {
        self.entries.get(index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.entries.len()
    }

    pub fn entries(&self) -> &[StoredAudioEntry] {
        &self.entries
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.file_name.as_str())
    }

    /// Where the empty state sends the user
    pub fn empty_route() -> Route {
        Route::Upload
    }
}

impl From<Vec<StoredAudioEntry>> for Playlist {
    fn from(entries: Vec<StoredAudioEntry>) -> Self {
        Self::new(entries)
    }
}
