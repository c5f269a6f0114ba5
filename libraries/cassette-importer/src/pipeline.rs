//! Upload orchestration - readiness gate, duplicate check, encoding and persistence

use crate::{
    encode, FileContent, ImportError, Result, StoredFile, UploadConfig, UploadEvent, UploadFile,
    UploadSummary,
};
use cassette_core::{MusicStore, NewAudioEntry};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{mpsc, OnceCell};

/// Upload pipeline bound to a Durable Store
///
/// Created before the store is available; [`UploadPipeline::attach`] marks it
/// ready. Uploads attempted earlier fail with [`ImportError::StoreNotReady`].
pub struct UploadPipeline {
    store: OnceCell<Arc<dyn MusicStore>>,
    config: UploadConfig,
}

impl UploadPipeline {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            store: OnceCell::new(),
            config,
        }
    }

    /// Pipeline that is ready immediately
    pub fn with_store(store: Arc<dyn MusicStore>, config: UploadConfig) -> Self {
        Self {
            store: OnceCell::new_with(Some(store)),
            config,
        }
    }

    /// Hand over the opened store
    ///
    /// Returns `false` if a store was already attached; the first one stays.
    pub fn attach(&self, store: Arc<dyn MusicStore>) -> bool {
        self.store.set(store).is_ok()
    }

    pub fn is_ready(&self) -> bool {
        self.store.initialized()
    }

    /// Upload a batch of files
    ///
    /// Returns a channel for receiving notifications and a handle to the upload task.
    /// Files are processed one after another, so their keys follow submission order.
    pub fn upload(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<(
        mpsc::Receiver<UploadEvent>,
        tokio::task::JoinHandle<Result<UploadSummary>>,
    )> {
        let Some(store) = self.store.get().cloned() else {
            tracing::error!("Upload rejected: store not initialized");
            return Err(ImportError::StoreNotReady);
        };

        let (tx, rx) = mpsc::channel(self.config.event_buffer.max(1));
        let config = self.config.clone();

        let handle = tokio::spawn(async move { Self::upload_impl(files, store, config, tx).await });

        Ok((rx, handle))
    }

    /// Upload a batch and wait for the summary, discarding events
    pub async fn upload_all(&self, files: Vec<UploadFile>) -> Result<UploadSummary> {
        let (mut rx, handle) = self.upload(files)?;
        while rx.recv().await.is_some() {}
        handle
            .await
            .map_err(|e| ImportError::Task(e.to_string()))?
    }

    /// Internal implementation of a batch upload
    async fn upload_impl(
        files: Vec<UploadFile>,
        store: Arc<dyn MusicStore>,
        config: UploadConfig,
        events: mpsc::Sender<UploadEvent>,
    ) -> Result<UploadSummary> {
        let total = files.len();
        let mut summary = UploadSummary::new(total);

        let _ = events.send(UploadEvent::Started { total }).await;

        // Fresh read: another session may have stored files since the last listing
        let mut known: HashSet<String> = match store.file_names().await {
            Ok(names) => names.into_iter().collect(),
            Err(e) => {
                tracing::error!("Error occurred during upload: {}", e);
                let _ = events
                    .send(UploadEvent::BatchFailed {
                        error: e.to_string(),
                    })
                    .await;
                return Err(e.into());
            }
        };

        for file in files {
            let file_name = file.name.clone();

            match Self::upload_single_file(file, store.as_ref(), &config, &known).await {
                Ok(key) => {
                    tracing::debug!(key, "Uploaded {}", file_name);
                    known.insert(file_name.clone());
                    let _ = events
                        .send(UploadEvent::Stored {
                            file_name: file_name.clone(),
                            key,
                        })
                        .await;
                    summary.stored.push(StoredFile { file_name, key });
                }
                Err(ImportError::Duplicate(name)) => {
                    tracing::warn!("{} is already uploaded", name);
                    let _ = events
                        .send(UploadEvent::Duplicate {
                            file_name: name.clone(),
                        })
                        .await;
                    summary.duplicates.push(name);
                }
                Err(e @ ImportError::UnsupportedFormat(_)) => {
                    tracing::warn!("Skipping {}: {}", file_name, e);
                    let _ = events
                        .send(UploadEvent::Rejected {
                            file_name: file_name.clone(),
                            reason: e.to_string(),
                        })
                        .await;
                    summary.failed.push((file_name, e.to_string()));
                }
                Err(e) => {
                    tracing::error!("Failed to upload {}: {}", file_name, e);
                    let _ = events
                        .send(UploadEvent::Failed {
                            file_name: file_name.clone(),
                            error: e.to_string(),
                        })
                        .await;
                    summary.failed.push((file_name, e.to_string()));
                }
            }

            let _ = events
                .send(UploadEvent::Progress {
                    processed: summary.processed(),
                    total,
                })
                .await;
        }

        if summary.all_succeeded() {
            tracing::info!("All files uploaded successfully");
        } else {
            tracing::info!(
                stored = summary.stored.len(),
                duplicates = summary.duplicates.len(),
                failed = summary.failed.len(),
                "Upload finished"
            );
        }

        let _ = events.send(UploadEvent::Finished(summary.clone())).await;

        Ok(summary)
    }

    /// Check, encode and persist one file
    async fn upload_single_file(
        file: UploadFile,
        store: &dyn MusicStore,
        config: &UploadConfig,
        known: &HashSet<String>,
    ) -> Result<i64> {
        if known.contains(&file.name) {
            return Err(ImportError::Duplicate(file.name));
        }

        if config.audio_only && !encode::is_audio(&file.name) {
            return Err(ImportError::UnsupportedFormat(file.name));
        }

        let bytes = match file.content {
            FileContent::Bytes(bytes) => bytes,
            FileContent::Path(path) => {
                tokio::fs::read(&path)
                    .await
                    .map_err(|source| ImportError::Decode {
                        file_name: file.name.clone(),
                        source,
                    })?
            }
        };

        let file_data = encode::to_data_uri(&file.name, &bytes);
        let key = store.add(NewAudioEntry::new(file.name, file_data)).await?;

        Ok(key)
    }
}

impl Default for UploadPipeline {
    fn default() -> Self {
        Self::new(UploadConfig::default())
    }
}
