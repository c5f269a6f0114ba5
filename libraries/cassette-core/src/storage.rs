//! Storage traits
//!
//! Two stores back the player:
//! - [`MusicStore`]: the durable, asynchronous collection of uploaded audio
//! - [`SnapshotStore`]: a small synchronous key-value store scoped to one session

use crate::error::Result;
use crate::types::{NewAudioEntry, StoredAudioEntry};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// Durable Store access
///
/// Every operation is an independent request. Callers that need two `add`
/// calls to land in order must await the first before issuing the second.
#[async_trait]
pub trait MusicStore: Send + Sync {
    /// All entries in store iteration order (ascending key)
    async fn get_all(&self) -> Result<Vec<StoredAudioEntry>>;

    /// Persist a new entry, returning the assigned key
    async fn add(&self, entry: NewAudioEntry) -> Result<i64>;

    /// File names of every stored entry
    async fn file_names(&self) -> Result<Vec<String>> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .map(|entry| entry.file_name)
            .collect())
    }

    /// Number of stored entries
    async fn count(&self) -> Result<usize> {
        Ok(self.get_all().await?.len())
    }
}

/// Session-scoped snapshot storage
///
/// Values are JSON strings. `write_raw` replaces whatever was stored under the key.
pub trait SnapshotStore: Send + Sync {
    fn read_raw(&self, key: &str) -> Option<String>;

    fn write_raw(&self, key: &str, value: &str);

    /// Read and decode a value, falling back to `default`
    ///
    /// A missing key and an unparsable value are treated the same way.
    fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        read_or_default(self, key, default)
    }

    /// Encode and store a value
    fn write<T: Serialize>(&self, key: &str, value: &T)
    where
        Self: Sized,
    {
        write_json(self, key, value);
    }
}

/// [`SnapshotStore::read`] for trait objects
pub fn read_or_default<T: DeserializeOwned>(
    store: &(impl SnapshotStore + ?Sized),
    key: &str,
    default: T,
) -> T {
    let Some(raw) = store.read_raw(key) else {
        return default;
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(key, error = %e, "Discarding unparsable snapshot");
            default
        }
    }
}

/// [`SnapshotStore::write`] for trait objects
pub fn write_json<T: Serialize>(store: &(impl SnapshotStore + ?Sized), key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.write_raw(key, &json),
        Err(e) => tracing::warn!(key, error = %e, "Failed to encode snapshot"),
    }
}
