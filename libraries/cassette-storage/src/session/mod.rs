//! Session-scoped snapshot stores
//!
//! Both stores implement [`SnapshotStore`]: synchronous, last-write-wins, whole
//! value replacement. Write failures are logged and swallowed because the
//! snapshot is a convenience, never a source of truth.
//!
//! # Example
//!
//! ```rust
//! use cassette_core::{PlaybackSnapshot, SnapshotStore, SNAPSHOT_KEY};
//! use cassette_storage::MemorySessionStore;
//!
//! let session = MemorySessionStore::new();
//! session.write(SNAPSHOT_KEY, &PlaybackSnapshot::new(Some(1), 42.5));
//!
//! let restored = session.read(SNAPSHOT_KEY, PlaybackSnapshot::default());
//! assert_eq!(restored.currently_playing_index, 1);
//! ```

use cassette_core::SnapshotStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// In-process session store; the session ends when the value is dropped
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// End the session
    pub fn clear(&self) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl SnapshotStore for MemorySessionStore {
    fn read_raw(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write_raw(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

/// Session store backed by one JSON file per key
///
/// Lets consecutive processes share a session: everything lives under
/// `<root>/<session-id>/` until [`FileSessionStore::clear`] ends the session.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(root: impl AsRef<Path>, session_id: &str) -> Self {
        Self {
            dir: root.as_ref().join(sanitize(session_id)),
        }
    }

    /// Directory holding this session's values
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// End the session, removing every stored value
    pub fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_dir_all(&self.dir) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize(key)))
    }
}

impl SnapshotStore for FileSessionStore {
    fn read_raw(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn write_raw(&self, key: &str, value: &str) {
        let result =
            std::fs::create_dir_all(&self.dir).and_then(|()| std::fs::write(self.path_for(key), value));

        if let Err(e) = result {
            tracing::warn!(key, dir = %self.dir.display(), "Failed to write session value: {}", e);
        }
    }
}

/// Keep keys and session ids usable as single path components
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
