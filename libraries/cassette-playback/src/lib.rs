//! Cassette - Playback Control
//!
//! Platform-agnostic playback control for Cassette.
//!
//! This crate provides:
//! - Playlist navigation with wrap-around (next, previous, track end)
//! - Toggle-pause-on-reselect
//! - Seek with a non-finite guard
//! - Resume-on-reload through the Snapshot Store
//! - Events for UI synchronization
//!
//! # Architecture
//!
//! `cassette-playback` is completely platform-agnostic:
//! - No dependency on an audio output
//! - No dependency on cassette-storage (database)
//!
//! The element that renders audio is provided via the [`PlaybackElement`] trait,
//! and the session store via [`cassette_core::SnapshotStore`].
//!
//! # Example: Platform Integration
//!
//! ```rust
//! use cassette_core::{Playlist, SnapshotStore, StoredAudioEntry};
//! use cassette_playback::{PlaybackConfig, PlaybackController, PlaybackElement, Result};
//! use std::collections::HashMap;
//! use std::sync::{Arc, Mutex};
//!
//! // Implement PlaybackElement for your platform
//! #[derive(Default)]
//! struct MyElement {
//!     time: f64,
//! }
//!
//! impl PlaybackElement for MyElement {
//!     fn load(&mut self, _source: &str) {}
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn set_current_time(&mut self, seconds: f64) { self.time = seconds; }
//!     fn current_time(&self) -> f64 { self.time }
//!     fn duration(&self) -> Option<f64> { None }
//! }
//!
//! #[derive(Default)]
//! struct Session(Mutex<HashMap<String, String>>);
//!
//! impl SnapshotStore for Session {
//!     fn read_raw(&self, key: &str) -> Option<String> {
//!         self.0.lock().unwrap().get(key).cloned()
//!     }
//!     fn write_raw(&self, key: &str, value: &str) {
//!         self.0.lock().unwrap().insert(key.into(), value.into());
//!     }
//! }
//!
//! let playlist = Playlist::new(vec![
//!     StoredAudioEntry { key: 1, file_name: "a.mp3".into(), file_data: "data:,".into() },
//!     StoredAudioEntry { key: 2, file_name: "b.mp3".into(), file_data: "data:,".into() },
//! ]);
//!
//! let mut controller = PlaybackController::mount(
//!     playlist,
//!     Box::new(MyElement::default()),
//!     Arc::new(Session::default()),
//!     PlaybackConfig::default(),
//! );
//!
//! controller.select_index(0).unwrap();
//! controller.next().unwrap();
//! assert_eq!(controller.current_index(), Some(1));
//! controller.next().unwrap();
//! assert_eq!(controller.current_index(), Some(0));
//! ```

mod controller;
mod element;
mod error;
pub mod events;
mod time;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use element::PlaybackElement;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use time::format_time;
pub use types::{PlaybackConfig, PlaybackState};
