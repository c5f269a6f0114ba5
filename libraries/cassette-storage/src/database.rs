/// Durable Store lifecycle: open, version check, schema creation
use crate::error::{Result, StorageError};
use cassette_core::{StoreError, STORE_NAME, STORE_VERSION};
use sqlx::sqlite::SqlitePool;
use std::path::Path;

/// Schema statements, applied in order on first open or upgrade
const MIGRATIONS: &[&str] = &[include_str!(
    "../migrations/20250105000001_create_music_files.sql"
)];

/// Handle to the opened Durable Store
///
/// Cloning is cheap; clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct MusicDatabase {
    pool: SqlitePool,
}

impl MusicDatabase {
    /// Open the store, creating or upgrading the schema when needed
    ///
    /// # Errors
    /// Returns `StoreError::Open` if the engine cannot be reached or the file was
    /// written by a newer schema version.
    pub async fn open(database_url: &str) -> std::result::Result<Self, StoreError> {
        let pool = crate::create_pool(database_url)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()).into_open())?;

        match Self::prepare(&pool).await {
            Ok(()) => {
                tracing::info!("Opened {} (version {})", STORE_NAME, STORE_VERSION);
                Ok(Self { pool })
            }
            Err(e) => {
                pool.close().await;
                tracing::error!("Error opening {}: {}", STORE_NAME, e);
                Err(e.into_open())
            }
        }
    }

    /// Open the store inside `data_dir`, creating the directory if missing
    pub async fn open_in(data_dir: &Path) -> std::result::Result<Self, StoreError> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|e| StorageError::Io(e).into_open())?;
        Self::open(&database_url(data_dir)).await
    }

    /// Wrap an existing pool (for testing); the schema must already be in place
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every connection in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn prepare(pool: &SqlitePool) -> Result<()> {
        let found = schema_version(pool).await?;

        if found > STORE_VERSION {
            return Err(StorageError::VersionConflict {
                found,
                supported: STORE_VERSION,
            });
        }

        if found < STORE_VERSION {
            tracing::info!(
                "Upgrading {} from version {} to {}",
                STORE_NAME,
                found,
                STORE_VERSION
            );
            initialize_schema(pool).await?;
            sqlx::query(&format!("PRAGMA user_version = {STORE_VERSION}"))
                .execute(pool)
                .await?;
        }

        Ok(())
    }
}

/// Connection URL of the store file inside `data_dir`
pub fn database_url(data_dir: &Path) -> String {
    format!(
        "sqlite://{}",
        data_dir.join(format!("{STORE_NAME}.db")).display()
    )
}

/// Schema version recorded in the database file (0 for a fresh file)
pub async fn schema_version(pool: &SqlitePool) -> Result<i64> {
    let version: i64 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await?;
    Ok(version)
}

/// Create the `musicFiles` collection if it is absent
///
/// Idempotent. There is no data migration beyond "create if missing".
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    for migration in MIGRATIONS {
        sqlx::query(migration)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }
    Ok(())
}
