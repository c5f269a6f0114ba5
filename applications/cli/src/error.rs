/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] cassette_core::StoreError),

    #[error(transparent)]
    Import(#[from] cassette_importer::ImportError),

    #[error(transparent)]
    Playback(#[from] cassette_playback::PlaybackError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
