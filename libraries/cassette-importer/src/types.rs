//! Common types for the upload pipeline

use cassette_core::Route;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a selected file's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Already in memory
    Bytes(Vec<u8>),

    /// Read lazily when the file is processed
    Path(PathBuf),
}

/// One user-selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Name used for duplicate detection and display
    pub name: String,

    pub content: FileContent,
}

impl UploadFile {
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: FileContent::Bytes(bytes.into()),
        }
    }

    /// Use the final path component as the file name
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self {
            name,
            content: FileContent::Path(path.to_path_buf()),
        }
    }
}

/// Configuration for upload batches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    /// Reject files whose name does not map to an audio MIME type
    pub audio_only: bool,

    /// Capacity of the event channel
    pub event_buffer: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            audio_only: true,
            event_buffer: 100,
        }
    }
}

/// Notifications emitted while a batch runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UploadEvent {
    Started { total: usize },

    /// Skipped because the name is already stored (warning)
    Duplicate { file_name: String },

    /// Skipped by the audio filter
    Rejected { file_name: String, reason: String },

    Stored { file_name: String, key: i64 },

    /// Read or store failure for one file; the batch continues
    Failed { file_name: String, error: String },

    Progress { processed: usize, total: usize },

    /// The batch could not start (existing names unreadable)
    BatchFailed { error: String },

    Finished(UploadSummary),
}

/// A file that made it into the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub file_name: String,
    pub key: i64,
}

/// Outcome of a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSummary {
    pub submitted: usize,
    pub stored: Vec<StoredFile>,
    pub duplicates: Vec<String>,
    /// (file name, error message) for rejected, unreadable and unstorable files
    pub failed: Vec<(String, String)>,
}

impl UploadSummary {
    pub fn new(submitted: usize) -> Self {
        Self {
            submitted,
            ..Self::default()
        }
    }

    /// Every submitted file was stored
    ///
    /// Duplicates count against this: a batch containing one is not a full success.
    pub fn all_succeeded(&self) -> bool {
        self.submitted > 0 && self.stored.len() == self.submitted
    }

    pub fn processed(&self) -> usize {
        self.stored.len() + self.duplicates.len() + self.failed.len()
    }

    /// Screen to move to after the batch, if any
    pub fn next_route(&self) -> Option<Route> {
        self.all_succeeded().then_some(Route::SongList)
    }
}
