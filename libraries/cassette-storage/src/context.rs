use crate::{music_files, MusicDatabase};
use async_trait::async_trait;
use cassette_core::{error::Result, MusicStore, NewAudioEntry, StoredAudioEntry};

#[async_trait]
impl MusicStore for MusicDatabase {
    async fn get_all(&self) -> Result<Vec<StoredAudioEntry>> {
        music_files::get_all(self.pool()).await.map_err(|e| {
            tracing::error!("Error getting files from store: {}", e);
            e.into_read()
        })
    }

    async fn add(&self, entry: NewAudioEntry) -> Result<i64> {
        let key = music_files::add(self.pool(), &entry).await.map_err(|e| {
            tracing::error!("Error saving {} to store: {}", entry.file_name, e);
            e.into_write()
        })?;
        tracing::debug!(key, file_name = %entry.file_name, "Stored audio entry");
        Ok(key)
    }

    async fn file_names(&self) -> Result<Vec<String>> {
        music_files::file_names(self.pool())
            .await
            .map_err(crate::StorageError::into_read)
    }

    async fn count(&self) -> Result<usize> {
        music_files::count(self.pool())
            .await
            .map_err(crate::StorageError::into_read)
    }
}

impl MusicDatabase {
    /// Store-wide clear
    pub async fn clear(&self) -> Result<u64> {
        music_files::clear(self.pool())
            .await
            .map_err(crate::StorageError::into_write)
    }
}
