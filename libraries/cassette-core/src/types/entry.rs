/// Stored audio entries
use serde::{Deserialize, Serialize};

/// One uploaded audio file as held by the Durable Store
///
/// `key` is assigned by the store on insert. Entries are never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAudioEntry {
    /// Auto-incremented store key
    pub key: i64,

    /// Original file name, unique across entries
    pub file_name: String,

    /// Encoded binary content (`data:<mime>;base64,<payload>`)
    pub file_data: String,
}

/// Value written by `MusicStore::add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAudioEntry {
    pub file_name: String,
    pub file_data: String,
}

impl NewAudioEntry {
    pub fn new(file_name: impl Into<String>, file_data: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_data: file_data.into(),
        }
    }

    /// Attach the key the store assigned
    #[must_use]
    pub fn into_stored(self, key: i64) -> StoredAudioEntry {
        StoredAudioEntry {
            key,
            file_name: self.file_name,
            file_data: self.file_data,
        }
    }
}
