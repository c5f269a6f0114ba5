//! Command handlers
//!
//! Every invocation behaves like a fresh page load: the store is opened, the
//! playlist read in full, and the controller mounted over the session's
//! snapshot before the command runs.

use crate::{config::CliConfig, element::HeadlessElement, error::Result};
use cassette_core::{Playlist, Route, SnapshotStore};
use cassette_importer::{ImportError, UploadConfig, UploadEvent, UploadFile, UploadPipeline, UploadSummary};
use cassette_playback::{format_time, PlaybackConfig, PlaybackController, PlaybackState};
use cassette_storage::{FileSessionStore, MusicDatabase};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Session key holding whether the last command left playback running
pub const PLAYER_STATE_KEY: &str = "playerState";

/// Play/pause flag carried between invocations, next to the playback snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub playing: bool,
}

/// Playback commands applied to a freshly mounted controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transport {
    Play(usize),
    Toggle,
    Next,
    Previous,
    Ended,
    Seek(f64),
    Status,
}

/// Outcome of an upload batch as shown to the user
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    /// One line per notification, in the order they were raised
    pub notices: Vec<String>,

    /// `None` when the batch failed before any file was processed
    pub summary: Option<UploadSummary>,
}

impl UploadReport {
    pub fn next_route(&self) -> Option<Route> {
        self.summary.as_ref().and_then(UploadSummary::next_route)
    }
}

pub struct App {
    config: CliConfig,
    store: Arc<MusicDatabase>,
    session: Arc<FileSessionStore>,
    pipeline: UploadPipeline,
}

impl App {
    /// Validate `config`, open the Durable Store and bind the session
    pub async fn open(config: CliConfig) -> Result<Self> {
        config.validate()?;

        let pipeline = UploadPipeline::new(UploadConfig {
            audio_only: config.upload.audio_only,
            ..UploadConfig::default()
        });

        let store = match &config.storage.database_url {
            Some(url) => MusicDatabase::open(url).await?,
            None => MusicDatabase::open_in(&config.storage.data_dir).await?,
        };
        let store = Arc::new(store);
        pipeline.attach(store.clone());

        let session = Arc::new(FileSessionStore::new(
            config.sessions_dir(),
            &config.session.id,
        ));

        tracing::debug!(
            session = %config.session.id,
            data_dir = %config.storage.data_dir.display(),
            "Opened application"
        );

        Ok(Self {
            config,
            store,
            session,
            pipeline,
        })
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<MusicDatabase> {
        &self.store
    }

    pub fn session(&self) -> &Arc<FileSessionStore> {
        &self.session
    }

    /// Upload files from disk, collecting notifications as they arrive
    pub async fn upload(&self, paths: Vec<PathBuf>) -> Result<UploadReport> {
        let files = paths.into_iter().map(UploadFile::from_path).collect();
        let (mut rx, handle) = self.pipeline.upload(files)?;

        let mut report = UploadReport::default();
        while let Some(event) = rx.recv().await {
            if let Some(notice) = describe(&event) {
                report.notices.push(notice);
            }
        }

        match handle.await.map_err(|e| ImportError::Task(e.to_string()))? {
            Ok(summary) => report.summary = Some(summary),
            Err(e) => tracing::debug!("Upload batch aborted: {}", e),
        }

        Ok(report)
    }

    /// Read the playlist and mount a controller over the session snapshot
    ///
    /// A restored track resumes playing only if the previous command left it
    /// playing; without a saved flag `playback.resume_playing` decides.
    pub async fn mount(&self) -> PlaybackController {
        let playlist = Playlist::load(self.store.as_ref()).await;
        let session: Arc<dyn SnapshotStore> = self.session.clone();

        let mut controller = PlaybackController::mount(
            playlist,
            Box::new(HeadlessElement::new()),
            session,
            PlaybackConfig {
                resume_playing: self.player_state().playing,
                ..PlaybackConfig::default()
            },
        );
        controller.on_loaded_metadata();
        controller
    }

    /// Mount a controller and apply one playback command to it
    pub async fn transport(&self, command: Transport) -> Result<PlaybackController> {
        let mut controller = self.mount().await;

        match command {
            Transport::Play(index) => controller.select_index(index)?,
            Transport::Toggle => controller.toggle_play_pause(),
            Transport::Next => controller.next()?,
            Transport::Previous => controller.previous()?,
            Transport::Ended => controller.on_ended()?,
            Transport::Seek(seconds) => {
                if !controller.seek(seconds) {
                    tracing::info!("Ignored seek to {}", seconds);
                }
            }
            Transport::Status => {}
        }

        controller.on_loaded_metadata();
        self.session.write(
            PLAYER_STATE_KEY,
            &PlayerState {
                playing: controller.is_playing(),
            },
        );
        Ok(controller)
    }

    /// Play/pause flag left by the last transport command
    pub fn player_state(&self) -> PlayerState {
        self.session.read(
            PLAYER_STATE_KEY,
            PlayerState {
                playing: self.config.playback.resume_playing,
            },
        )
    }

    /// Forget the session's snapshot and play/pause flag
    pub fn reset_session(&self) -> Result<()> {
        self.session.clear()?;
        tracing::info!(session = %self.config.session.id, "Session cleared");
        Ok(())
    }

    /// Close the store's connections
    pub async fn close(&self) {
        self.store.close().await;
    }
}

/// User-facing line for an upload notification
pub fn describe(event: &UploadEvent) -> Option<String> {
    match event {
        UploadEvent::Started { .. } | UploadEvent::Progress { .. } => None,
        UploadEvent::Duplicate { file_name } => {
            Some(format!("{} is already uploaded.", file_name))
        }
        UploadEvent::Rejected { file_name, reason } => {
            Some(format!("Skipped {}: {}", file_name, reason))
        }
        UploadEvent::Stored { file_name, .. } => Some(format!("Uploaded {}", file_name)),
        UploadEvent::Failed { file_name, error } => {
            Some(format!("Error uploading {}: {}", file_name, error))
        }
        UploadEvent::BatchFailed { error } => {
            Some(format!("Error occurred during upload: {}", error))
        }
        UploadEvent::Finished(summary) => summary
            .all_succeeded()
            .then(|| "All files uploaded successfully.".to_string()),
    }
}

/// Playlist lines, marking the current entry, or the empty state
pub fn render_list(controller: &PlaybackController) -> Vec<String> {
    let playlist = controller.playlist();
    if playlist.is_empty() {
        return vec![
            "No songs found".to_string(),
            format!("Go Home: {}", Playlist::empty_route()),
        ];
    }

    playlist
        .file_names()
        .enumerate()
        .map(|(index, name)| {
            let marker = if controller.current_index() == Some(index) {
                state_marker(controller.state())
            } else {
                " "
            };
            format!("{} {:>3}  {}", marker, index, name)
        })
        .collect()
}

/// One-line transport summary
pub fn render_status(controller: &PlaybackController) -> String {
    match controller.current_entry() {
        None => format!("Stopped ({} songs)", controller.playlist().len()),
        Some(entry) => format!(
            "{} {}  {} / {}",
            state_marker(controller.state()),
            entry.file_name,
            format_time(controller.current_time()),
            format_time(controller.duration().unwrap_or(0.0)),
        ),
    }
}

fn state_marker(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Playing => ">",
        PlaybackState::Paused => "|",
        PlaybackState::Idle => " ",
    }
}
