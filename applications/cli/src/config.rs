/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cassette.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_session")]
    pub session: SessionSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,

    #[serde(default = "default_upload")]
    pub upload: UploadSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Overrides the URL derived from `data_dir`
    #[serde(default)]
    pub database_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    #[serde(default = "default_session_id")]
    pub id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_true")]
    pub resume_playing: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadSettings {
    #[serde(default = "default_true")]
    pub audio_only: bool,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `cassette.toml` is read when
    /// present. `CASSETTE_`-prefixed variables override both, with `__`
    /// between section and key (`CASSETTE_SESSION__ID`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CASSETTE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.session.id.trim().is_empty() {
            return Err(CliError::Config(
                "Session id must not be empty (set CASSETTE_SESSION__ID)".to_string(),
            ));
        }

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(CliError::Config("Data directory must not be empty".to_string()));
        }

        Ok(())
    }

    /// URL of the Durable Store
    pub fn database_url(&self) -> String {
        self.storage
            .database_url
            .clone()
            .unwrap_or_else(|| cassette_storage::database_url(&self.storage.data_dir))
    }

    /// Root directory holding one subdirectory per session
    pub fn sessions_dir(&self) -> PathBuf {
        self.storage.data_dir.join("sessions")
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            session: default_session(),
            playback: default_playback(),
            upload: default_upload(),
        }
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
        database_url: None,
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_session() -> SessionSettings {
    SessionSettings {
        id: default_session_id(),
    }
}

fn default_session_id() -> String {
    "default".to_string()
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        resume_playing: default_true(),
    }
}

fn default_upload() -> UploadSettings {
    UploadSettings {
        audio_only: default_true(),
    }
}

fn default_true() -> bool {
    true
}
