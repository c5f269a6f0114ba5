//! Durable Store request tests: get_all, add, file_names, count, clear


use cassette_core::{MusicStore, NewAudioEntry, StoreError};
use cassette_storage::music_files;
use test_helpers::{data_uri, TestDb};

#[tokio::test]
async fn add_assigns_increasing_keys() {
    let test_db = TestDb::new().await;

    let first = test_db
        .db
        .add(NewAudioEntry::new("a.mp3", data_uri("a")))
        .await
        .unwrap();
    let second = test_db
        .db
        .add(NewAudioEntry::new("b.mp3", data_uri("b")))
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert!(second > first);
}

#[tokio::test]
async fn get_all_returns_insertion_order() {
    let test_db = TestDb::new().await;
    for name in ["c.mp3", "a.mp3", "b.mp3"] {
        test_db
            .db
            .add(NewAudioEntry::new(name, data_uri(name)))
            .await
            .unwrap();
    }

    let entries = test_db.db.get_all().await.unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.file_name.as_str()).collect();

    assert_eq!(names, vec!["c.mp3", "a.mp3", "b.mp3"]);
    assert_eq!(entries[1].file_data, data_uri("a.mp3"));
    assert_eq!(
        test_db.db.file_names().await.unwrap(),
        vec!["c.mp3", "a.mp3", "b.mp3"]
    );
}

#[tokio::test]
async fn store_does_not_enforce_unique_names() {
    let test_db = TestDb::new().await;

    test_db
        .db
        .add(NewAudioEntry::new("same.mp3", data_uri("1")))
        .await
        .unwrap();
    test_db
        .db
        .add(NewAudioEntry::new("same.mp3", data_uri("2")))
        .await
        .unwrap();

    assert_eq!(test_db.db.count().await.unwrap(), 2);
}

#[tokio::test]
async fn clear_removes_everything_and_keys_keep_increasing() {
    let test_db = TestDb::new().await;
    test_db
        .db
        .add(NewAudioEntry::new("a.mp3", data_uri("a")))
        .await
        .unwrap();

    assert_eq!(test_db.db.clear().await.unwrap(), 1);
    assert_eq!(test_db.db.count().await.unwrap(), 0);

    let key = test_db
        .db
        .add(NewAudioEntry::new("b.mp3", data_uri("b")))
        .await
        .unwrap();
    assert_eq!(key, 2);
}

#[tokio::test]
async fn missing_collection_maps_to_read_and_write_errors() {
    let test_db = TestDb::new().await;
    sqlx::query("DROP TABLE musicFiles")
        .execute(test_db.db.pool())
        .await
        .unwrap();

    assert!(matches!(test_db.db.get_all().await, Err(StoreError::Read(_))));
    assert!(matches!(test_db.db.count().await, Err(StoreError::Read(_))));
    assert!(matches!(
        test_db.db.add(NewAudioEntry::new("a.mp3", data_uri("a"))).await,
        Err(StoreError::Write(_))
    ));
}

#[tokio::test]
async fn slice_functions_work_on_raw_pool() {
    let test_db = TestDb::new().await;
    let pool = test_db.db.pool();

    let key = music_files::add(pool, &NewAudioEntry::new("x.ogg", data_uri("x")))
        .await
        .unwrap();

    assert_eq!(music_files::count(pool).await.unwrap(), 1);
    assert_eq!(music_files::get_all(pool).await.unwrap()[0].key, key);
    assert_eq!(music_files::file_names(pool).await.unwrap(), vec!["x.ogg"]);
}
