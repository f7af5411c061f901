//! File-backed implementation of the announcement store.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use async_trait::async_trait;

use super::{error::StoreError, traits::AnnouncementStore};
use crate::models::AnnouncementRecord;

/// Stores the announcement record as a single JSON file.
///
/// Saves go through a temporary file in the same directory followed by a
/// rename, so a crash mid-save leaves either the old state or the new state,
/// never a torn file. A corrupt existing file is reported as
/// [`StoreError::Corrupt`] rather than silently treated as empty; starting
/// over empty would re-announce every feed's latest video.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_atomically(&self, json: &[u8]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| StoreError::Write { path: self.path.clone(), source: e })?;
        tmp.write_all(json)
            .map_err(|e| StoreError::Write { path: self.path.clone(), source: e })?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Write { path: self.path.clone(), source: e.error })?;

        Ok(())
    }
}

#[async_trait]
impl AnnouncementStore for JsonFileStore {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn load(&self) -> Result<AnnouncementRecord, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no announcement state yet, starting empty");
                return Ok(AnnouncementRecord::default());
            }
            Err(e) => return Err(StoreError::Read { path: self.path.clone(), source: e }),
        };

        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Corrupt { path: self.path.clone(), source: e })
    }

    #[tracing::instrument(skip(self, record), level = "debug")]
    async fn save(&self, record: &AnnouncementRecord) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(record).map_err(StoreError::Serialize)?;
        self.write_atomically(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("last_videos.json"))
    }

    #[tokio::test]
    async fn test_load_returns_empty_record_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let record = store.load().await.unwrap();

        assert!(record.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut record = AnnouncementRecord::default();
        record.mark_announced("JEE Wallah", "dQw4w9WgXcQ");
        record.mark_announced("Lakshya JEE", "abc123");
        store.save(&record).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_load_fails_on_corrupt_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_videos.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(path);
        let result = store.load().await;

        assert!(matches!(result.unwrap_err(), StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_save_leaves_no_temporary_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut record = AnnouncementRecord::default();
        record.mark_announced("JEE Wallah", "v1");
        store.save(&record).await.unwrap();
        record.mark_announced("JEE Wallah", "v2");
        store.save(&record).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("last_videos.json")]);
    }

    #[tokio::test]
    async fn test_save_writes_schema_version() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&AnnouncementRecord::default()).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("last_videos.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], crate::models::SCHEMA_VERSION);
    }

    #[tokio::test]
    async fn test_load_accepts_state_without_version_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_videos.json");
        std::fs::write(&path, r#"{"feeds": {"JEE Wallah": "v1"}}"#).unwrap();

        let store = JsonFileStore::new(path);
        let record = store.load().await.unwrap();

        assert_eq!(record.last_announced("JEE Wallah"), Some("v1"));
    }
}
