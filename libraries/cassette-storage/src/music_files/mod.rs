//! Queries over the `musicFiles` collection

use crate::StorageError;
use cassette_core::{NewAudioEntry, StoredAudioEntry};
use sqlx::{Row, SqlitePool};

type Result<T> = std::result::Result<T, StorageError>;

/// Get every entry in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<StoredAudioEntry>> {
    let rows = sqlx::query("SELECT id, fileName, fileData FROM musicFiles ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.into_iter()
        .map(|row| -> Result<StoredAudioEntry> {
            Ok(StoredAudioEntry {
                key: row.try_get("id")?,
                file_name: row.try_get("fileName")?,
                file_data: row.try_get("fileData")?,
            })
        })
        .collect()
}

/// Insert an entry and return its key
pub async fn add(pool: &SqlitePool, entry: &NewAudioEntry) -> Result<i64> {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query("INSERT INTO musicFiles (fileName, fileData, addedAt) VALUES (?, ?, ?)")
        .bind(&entry.file_name)
        .bind(&entry.file_data)
        .bind(now)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Names of all stored files, without loading their data
pub async fn file_names(pool: &SqlitePool) -> Result<Vec<String>> {
    let names = sqlx::query_scalar("SELECT fileName FROM musicFiles ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(names)
}

pub async fn count(pool: &SqlitePool) -> Result<usize> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM musicFiles")
        .fetch_one(pool)
        .await?;
    Ok(usize::try_from(count).unwrap_or_default())
}

/// Delete every entry
///
/// Returns the number of removed entries.
pub async fn clear(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM musicFiles").execute(pool).await?;
    Ok(result.rows_affected())
}
