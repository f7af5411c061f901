//! Durability tests for the file-backed announcement store.

use herald::{
    models::{AnnouncementRecord, SCHEMA_VERSION},
    persistence::{error::StoreError, traits::AnnouncementStore, JsonFileStore},
};

#[tokio::test]
async fn state_survives_a_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_videos.json");

    let mut record = AnnouncementRecord::default();
    record.mark_announced("JEE Wallah", "dQw4w9WgXcQ");
    JsonFileStore::new(path.clone()).save(&record).await.unwrap();

    // A fresh store instance simulates the next process start.
    let loaded = JsonFileStore::new(path).load().await.unwrap();
    assert_eq!(loaded, record);
}

#[tokio::test]
async fn first_start_begins_with_an_empty_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("last_videos.json"));

    let record = store.load().await.unwrap();

    assert!(record.is_empty());
    assert_eq!(record.version, SCHEMA_VERSION);
}

#[tokio::test]
async fn corrupt_state_is_reported_not_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_videos.json");
    std::fs::write(&path, r#"{"version": 1, "feeds": "#).unwrap();

    let result = JsonFileStore::new(path).load().await;

    assert!(matches!(result.unwrap_err(), StoreError::Corrupt { .. }));
}

#[tokio::test]
async fn state_written_before_the_version_field_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_videos.json");
    std::fs::write(&path, r#"{"feeds": {"JEE Wallah": "v1", "Lakshya JEE": "v2"}}"#).unwrap();

    let record = JsonFileStore::new(path).load().await.unwrap();

    assert_eq!(record.version, SCHEMA_VERSION);
    assert_eq!(record.last_announced("JEE Wallah"), Some("v1"));
    assert_eq!(record.last_announced("Lakshya JEE"), Some("v2"));
}

#[tokio::test]
async fn repeated_saves_replace_the_file_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_videos.json");
    let store = JsonFileStore::new(path.clone());

    for video_id in ["v1", "v2", "v3"] {
        let mut record = AnnouncementRecord::default();
        record.mark_announced("JEE Wallah", video_id);
        store.save(&record).await.unwrap();
    }

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.last_announced("JEE Wallah"), Some("v3"));

    // Atomic rename leaves exactly one file behind.
    let entries: Vec<_> =
        std::fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("last_videos.json")]);
}
