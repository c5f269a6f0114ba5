//! Playback controller - core orchestration
//!
//! Owns the current index, playing flag and current time. Mediates between the
//! playlist, the playback element and the Snapshot Store.

use crate::{
    element::PlaybackElement,
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    types::{PlaybackConfig, PlaybackState},
};
use cassette_core::{
    storage::{read_or_default, write_json},
    PlaybackSnapshot, Playlist, SnapshotStore, StoredAudioEntry,
};
use std::sync::Arc;

/// Playlist playback state machine
///
/// `Idle` (no selection) -> `Playing` <-> `Paused`. Every change to the current
/// index or current time is written to the Snapshot Store, so a new controller
/// mounted over the same session resumes where this one stopped.
pub struct PlaybackController {
    // State
    state: PlaybackState,
    current_index: Option<usize>,
    current_time: f64,
    duration: Option<f64>,

    playlist: Playlist,
    element: Box<dyn PlaybackElement>,
    snapshots: Arc<dyn SnapshotStore>,
    config: PlaybackConfig,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create a controller and restore the persisted snapshot
    ///
    /// A snapshot whose index does not address `playlist` is treated as "no
    /// selection" and overwritten.
    pub fn mount(
        playlist: Playlist,
        element: Box<dyn PlaybackElement>,
        snapshots: Arc<dyn SnapshotStore>,
        config: PlaybackConfig,
    ) -> Self {
        let snapshot: PlaybackSnapshot = read_or_default(
            snapshots.as_ref(),
            &config.snapshot_key,
            PlaybackSnapshot::default(),
        );

        let mut controller = Self {
            state: PlaybackState::Idle,
            current_index: None,
            current_time: 0.0,
            duration: None,
            playlist,
            element,
            snapshots,
            config,
            pending_events: Vec::new(),
        };

        match snapshot.index_within(controller.playlist.len()) {
            Some(index) => {
                tracing::debug!(
                    index,
                    time = snapshot.time(),
                    "Restoring playback snapshot"
                );
                controller.load_index(index, snapshot.time());
                if controller.config.resume_playing {
                    controller.start_playback();
                } else {
                    controller.set_state(PlaybackState::Paused);
                }
            }
            None => {
                if snapshot.currently_playing_index != PlaybackSnapshot::NO_SELECTION {
                    tracing::debug!(
                        index = snapshot.currently_playing_index,
                        len = controller.playlist.len(),
                        "Discarding out-of-range snapshot index"
                    );
                }
            }
        }

        controller.persist();
        controller
    }

    // ===== Playback Control =====

    /// Play the entry at `index`, or toggle pause when it is already current
    ///
    /// Reselecting the playing entry pauses it; reselecting a paused entry
    /// resumes at the preserved time. Any other entry starts from the beginning.
    pub fn select_index(&mut self, index: usize) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::PlaylistEmpty);
        }
        if !self.playlist.contains_index(index) {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }

        if self.current_index == Some(index) {
            match self.state {
                PlaybackState::Playing => self.pause(),
                PlaybackState::Paused | PlaybackState::Idle => self.start_playback(),
            }
            return Ok(());
        }

        self.go_to(index);
        Ok(())
    }

    /// Skip to the next entry, wrapping to the first after the last
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        let len = self.non_empty_len()?;
        let index = match self.current_index {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.go_to(index);
        Ok(())
    }

    /// Go to the previous entry, wrapping to the last before the first
    pub fn previous(&mut self) -> Result<()> {
        let len = self.non_empty_len()?;
        let index = match self.current_index {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.go_to(index);
        Ok(())
    }

    /// The element reached the end of the source
    pub fn on_ended(&mut self) -> Result<()> {
        self.next()
    }

    /// Flip between playing and paused; does nothing when idle
    pub fn toggle_play_pause(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.start_playback(),
            PlaybackState::Idle => {}
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.element.pause();
            self.set_state(PlaybackState::Paused);
        }
    }

    // ===== Seek =====

    /// Move to `seconds` in the current source
    ///
    /// Ignored when nothing is selected. Non-finite values are ignored and leave
    /// the current time unchanged. Negative values clamp to zero. Returns whether
    /// the seek was applied.
    pub fn seek(&mut self, seconds: f64) -> bool {
        if self.current_index.is_none() {
            tracing::debug!(seconds, "Ignoring seek with no track selected");
            return false;
        }
        if !seconds.is_finite() {
            tracing::debug!(seconds, "Ignoring non-finite seek");
            return false;
        }

        let seconds = seconds.max(0.0);
        self.element.set_current_time(seconds);
        self.set_time(seconds);
        true
    }

    // ===== Element callbacks =====

    /// Progress report from the element
    pub fn on_time_update(&mut self) {
        if self.current_index.is_none() || self.element.is_seeking() {
            return;
        }

        let seconds = self.element.current_time();
        if seconds.is_finite() && seconds >= 0.0 {
            self.set_time(seconds);
        }
    }

    /// The element finished reading the source's metadata
    pub fn on_loaded_metadata(&mut self) {
        let duration = self.element.duration().filter(|d| d.is_finite() && *d >= 0.0);
        if duration != self.duration {
            self.duration = duration;
            if let Some(seconds) = duration {
                self.pending_events
                    .push(PlaybackEvent::DurationChanged { seconds });
            }
        }
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Length of the loaded source, once known
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn current_entry(&self) -> Option<&StoredAudioEntry> {
        self.current_index.and_then(|i| self.playlist.get(i))
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// The value persisted after the last change
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot::new(self.current_index, self.current_time)
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    fn non_empty_len(&self) -> Result<usize> {
        match self.playlist.len() {
            0 => Err(PlaybackError::PlaylistEmpty),
            len => Ok(len),
        }
    }

    /// Load `index` from the start and play it
    fn go_to(&mut self, index: usize) {
        self.load_index(index, 0.0);
        self.start_playback();
        self.persist();
    }

    /// Load an entry into the element and position it, without starting playback
    fn load_index(&mut self, index: usize, seconds: f64) {
        let Some(entry) = self.playlist.get(index) else {
            return;
        };
        let file_name = entry.file_name.clone();
        self.element.load(&entry.file_data);
        self.element.set_current_time(seconds);

        let previous_index = self.current_index.replace(index);
        self.duration = None;
        self.current_time = seconds;

        self.pending_events.push(PlaybackEvent::TrackChanged {
            index,
            file_name,
            previous_index,
        });
        self.pending_events
            .push(PlaybackEvent::PositionChanged { seconds });
    }

    /// Ask the element to play; a rejection leaves the controller paused
    fn start_playback(&mut self) {
        if self.current_index.is_none() {
            return;
        }

        match self.element.play() {
            Ok(()) => self.set_state(PlaybackState::Playing),
            Err(e) => {
                tracing::warn!("Playback start failed: {}", e);
                self.pending_events.push(PlaybackEvent::StartRejected {
                    reason: e.to_string(),
                });
                self.set_state(PlaybackState::Paused);
            }
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events
                .push(PlaybackEvent::StateChanged { state });
        }
    }

    fn set_time(&mut self, seconds: f64) {
        if self.current_time != seconds {
            self.current_time = seconds;
            self.pending_events
                .push(PlaybackEvent::PositionChanged { seconds });
            self.persist();
        }
    }

    fn persist(&self) {
        write_json(
            self.snapshots.as_ref(),
            &self.config.snapshot_key,
            &self.snapshot(),
        );
    }
}
