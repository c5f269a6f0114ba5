//! Headless playback element
//!
//! Stands in for an audio output: it decodes the stored data URI, probes the
//! container with symphonia to learn the duration, and keeps a virtual
//! position. No samples are rendered.

use cassette_importer::encode;
use cassette_playback::{PlaybackElement, PlaybackError, Result};
use std::io::Cursor;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// What the last `load` found out about its source
#[derive(Debug, Clone, PartialEq)]
enum Source {
    Empty,
    Ready { duration: Option<f64> },
    Unplayable(String),
}

#[derive(Debug)]
pub struct HeadlessElement {
    source: Source,
    playing: bool,
    time: f64,
}

impl HeadlessElement {
    pub fn new() -> Self {
        Self {
            source: Source::Empty,
            playing: false,
            time: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Why the loaded source cannot play, if it cannot
    pub fn load_error(&self) -> Option<&str> {
        match &self.source {
            Source::Unplayable(reason) => Some(reason),
            _ => None,
        }
    }
}

impl Default for HeadlessElement {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackElement for HeadlessElement {
    fn load(&mut self, source: &str) {
        self.playing = false;
        self.time = 0.0;
        self.source = match probe(source) {
            Ok(duration) => Source::Ready { duration },
            Err(reason) => {
                tracing::debug!("Source is not playable: {}", reason);
                Source::Unplayable(reason)
            }
        };
    }

    fn play(&mut self) -> Result<()> {
        match &self.source {
            Source::Ready { .. } => {
                self.playing = true;
                Ok(())
            }
            Source::Unplayable(reason) => Err(PlaybackError::StartRejected(reason.clone())),
            Source::Empty => Err(PlaybackError::StartRejected("no source loaded".to_string())),
        }
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn duration(&self) -> Option<f64> {
        match self.source {
            Source::Ready { duration } => duration,
            _ => None,
        }
    }
}

/// Decode a data URI and read the default track's length
fn probe(source: &str) -> std::result::Result<Option<f64>, String> {
    let (mime, bytes) =
        encode::from_data_uri(source).ok_or_else(|| "source is not a base64 data URI".to_string())?;

    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

    let mut hint = Hint::new();
    hint.mime_type(&mime);

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| format!("Failed to probe source: {}", e))?;

    let track = probed
        .format
        .default_track()
        .ok_or_else(|| "No audio tracks found".to_string())?;
    let params = &track.codec_params;

    let duration = match (params.n_frames, params.sample_rate) {
        (Some(n_frames), Some(sample_rate)) if sample_rate > 0 => {
            Some(n_frames as f64 / f64::from(sample_rate))
        }
        _ => None,
    };

    Ok(duration)
}
