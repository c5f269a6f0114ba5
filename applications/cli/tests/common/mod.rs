//! Shared helpers for CLI integration tests
#![allow(dead_code)]

use cassette_cli::{App, CliConfig};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Application over a throwaway data directory
pub struct TestApp {
    pub app: App,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_session("tab-1").await
    }

    pub async fn with_session(session: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let app = App::open(config_in(temp_dir.path(), session))
            .await
            .expect("Failed to open app");
        Self { app, temp_dir }
    }

    /// A second process over the same data directory
    pub async fn reopen(&self, session: &str) -> App {
        App::open(config_in(self.temp_dir.path(), session))
            .await
            .expect("Failed to reopen app")
    }

    /// Write a mono 16-bit WAV of `seconds` length into the data directory
    pub fn wav_file(&self, name: &str, seconds: u32) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, wav_bytes(seconds)).expect("Failed to write WAV");
        path
    }
}

pub fn config_in(dir: &Path, session: &str) -> CliConfig {
    let mut config = CliConfig::default();
    config.storage.data_dir = dir.join("data");
    config.session.id = session.to_string();
    config
}

pub const SAMPLE_RATE: u32 = 8_000;

pub fn wav_bytes(seconds: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buffer = Vec::new();
    {
        let mut writer =
            hound::WavWriter::new(Cursor::new(&mut buffer), spec).expect("Failed to create writer");
        for n in 0..SAMPLE_RATE * seconds {
            let t = n as f32 / SAMPLE_RATE as f32;
            let sample = (t * 440.0 * std::f32::consts::TAU).sin() * i16::MAX as f32 * 0.5;
            writer.write_sample(sample as i16).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
    }
    buffer
}
