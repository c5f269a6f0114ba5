//! Cassette Core
//!
//! Platform-agnostic core types, traits, and error handling for Cassette.
//!
//! This crate provides the foundational building blocks shared by the storage,
//! importer and playback crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `StoredAudioEntry`, `PlaybackSnapshot`, `Route`
//! - **Core Traits**: `MusicStore` (durable, async) and `SnapshotStore` (session, sync)
//! - **Playlist Loader**: `Playlist::load` rehydrates the playlist from a `MusicStore`
//! - **Error Handling**: `StoreError` and the `Result` alias
//!
//! # Example
//!
//! ```rust
//! use cassette_core::types::{PlaybackSnapshot, Route};
//!
//! let snapshot = PlaybackSnapshot::default();
//! assert_eq!(snapshot.currently_playing_index, -1);
//! assert_eq!(Route::SongList.path(), "/songlist");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod playlist;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use playlist::Playlist;
pub use storage::{MusicStore, SnapshotStore};
pub use types::{
    NewAudioEntry, PlaybackSnapshot, Route, StoredAudioEntry, COLLECTION_NAME, SNAPSHOT_KEY,
    STORE_NAME, STORE_VERSION,
};
