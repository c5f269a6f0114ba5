//! Shared fixtures for playback controller tests

#![allow(dead_code)]

use cassette_core::{Playlist, StoredAudioEntry};
use cassette_playback::{PlaybackElement, PlaybackError, PlaybackState};
use std::sync::{Arc, Mutex};

/// What the mock element has been told to do
#[derive(Debug, Default)]
pub struct ElementLog {
    pub loaded: Vec<String>,
    pub playing: bool,
    pub time: f64,
    pub duration: Option<f64>,
    pub seeking: bool,
    /// Sources whose `play()` is refused
    pub reject: Vec<String>,
}

/// Mock playback element observable from the test through a shared log
#[derive(Clone, Default)]
pub struct MockElement {
    pub log: Arc<Mutex<ElementLog>>,
}

impl MockElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(source: &str) -> Self {
        let element = Self::default();
        element.log.lock().unwrap().reject.push(source.to_string());
        element
    }

    /// Simulate playback progress
    pub fn advance_to(&self, seconds: f64) {
        self.log.lock().unwrap().time = seconds;
    }

    pub fn last_loaded(&self) -> Option<String> {
        self.log.lock().unwrap().loaded.last().cloned()
    }

    pub fn is_playing(&self) -> bool {
        self.log.lock().unwrap().playing
    }

    pub fn time(&self) -> f64 {
        self.log.lock().unwrap().time
    }
}

impl PlaybackElement for MockElement {
    fn load(&mut self, source: &str) {
        let mut log = self.log.lock().unwrap();
        log.loaded.push(source.to_string());
        log.playing = false;
        log.time = 0.0;
    }

    fn play(&mut self) -> cassette_playback::Result<()> {
        let mut log = self.log.lock().unwrap();
        let current = log.loaded.last().cloned().unwrap_or_default();
        if log.reject.contains(&current) {
            log.playing = false;
            return Err(PlaybackError::StartRejected(format!("cannot decode {current}")));
        }
        log.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.log.lock().unwrap().playing = false;
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.log.lock().unwrap().time = seconds;
    }

    fn current_time(&self) -> f64 {
        self.log.lock().unwrap().time
    }

    fn duration(&self) -> Option<f64> {
        self.log.lock().unwrap().duration
    }

    fn is_seeking(&self) -> bool {
        self.log.lock().unwrap().seeking
    }
}

pub fn entry(key: i64, name: &str) -> StoredAudioEntry {
    StoredAudioEntry {
        key,
        file_name: name.to_string(),
        file_data: format!("data:audio/mpeg;base64,{key}"),
    }
}

/// Playlist of `len` entries named `track-0.mp3`, `track-1.mp3`, ...
pub fn playlist_of(len: usize) -> Playlist {
    Playlist::new(
        (0..len)
            .map(|i| entry(i as i64 + 1, &format!("track-{i}.mp3")))
            .collect(),
    )
}

pub fn assert_state(actual: PlaybackState, expected: PlaybackState) {
    assert_eq!(actual, expected, "unexpected controller state");
}
