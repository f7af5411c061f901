//! End-to-end poll cycle scenarios over a real file-backed store.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use herald::{
    engine::PollCycle,
    models::FeedConfig,
    persistence::{traits::AnnouncementStore, JsonFileStore},
    test_helpers::{FeedBuilder, RecordingNotifier, StaticVideoSource, VideoBuilder},
};

fn feeds_ab() -> Arc<Vec<FeedConfig>> {
    Arc::new(vec![
        FeedBuilder::new("Feed A").channel_id("UC_a").build(),
        FeedBuilder::new("Feed B").channel_id("UC_b").build(),
    ])
}

fn state_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("last_videos.json")
}

async fn seed_store(path: &Path, entries: &[(&str, &str)]) {
    let store = JsonFileStore::new(path.to_path_buf());
    let mut record = herald::models::AnnouncementRecord::default();
    for (feed, video) in entries {
        record.mark_announced(feed, video);
    }
    store.save(&record).await.unwrap();
}

#[tokio::test]
async fn first_cycle_announces_only_feeds_with_videos() {
    let dir = tempfile::tempdir().unwrap();
    let source = StaticVideoSource::new().with_latest("UC_a", VideoBuilder::new("v1").build());
    let notifier = Arc::new(RecordingNotifier::new());
    let cycle = PollCycle::new(
        feeds_ab(),
        Arc::new(source),
        Arc::clone(&notifier),
        Arc::new(JsonFileStore::new(state_path(&dir))),
    );

    let summary = cycle.run_once().await.unwrap();

    assert_eq!(summary.announced, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(notifier.announcements(), vec![("Feed A".to_string(), "v1".to_string())]);

    let record = JsonFileStore::new(state_path(&dir)).load().await.unwrap();
    assert_eq!(record.last_announced("Feed A"), Some("v1"));
    assert_eq!(record.last_announced("Feed B"), None);
}

#[tokio::test]
async fn second_cycle_is_idempotent_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let video = VideoBuilder::new("v1").build();

    // First "process": announces the video.
    let notifier = Arc::new(RecordingNotifier::new());
    let cycle = PollCycle::new(
        feeds_ab(),
        Arc::new(StaticVideoSource::new().with_latest("UC_a", video.clone())),
        Arc::clone(&notifier),
        Arc::new(JsonFileStore::new(state_path(&dir))),
    );
    cycle.run_once().await.unwrap();
    assert_eq!(notifier.announcements().len(), 1);

    // Second "process" over the same state file: nothing new to announce.
    let notifier = Arc::new(RecordingNotifier::new());
    let cycle = PollCycle::new(
        feeds_ab(),
        Arc::new(StaticVideoSource::new().with_latest("UC_a", video)),
        Arc::clone(&notifier),
        Arc::new(JsonFileStore::new(state_path(&dir))),
    );
    let summary = cycle.run_once().await.unwrap();

    assert_eq!(summary.announced, 0);
    assert!(notifier.announcements().is_empty());
}

#[tokio::test]
async fn failed_dispatch_is_retried_on_the_next_cycle() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(&state_path(&dir), &[("Feed A", "v1")]).await;

    // The gateway rejects the new video: the store must keep v1.
    let notifier = Arc::new(RecordingNotifier::new().failing_for("Feed A"));
    let cycle = PollCycle::new(
        feeds_ab(),
        Arc::new(StaticVideoSource::new().with_latest("UC_a", VideoBuilder::new("v2").build())),
        Arc::clone(&notifier),
        Arc::new(JsonFileStore::new(state_path(&dir))),
    );
    let summary = cycle.run_once().await.unwrap();

    assert_eq!(summary.announced, 0);
    assert_eq!(summary.failed, 1);
    assert!(notifier.announcements().is_empty());
    let record = JsonFileStore::new(state_path(&dir)).load().await.unwrap();
    assert_eq!(record.last_announced("Feed A"), Some("v1"));

    // The gateway recovers: the same video goes out and is recorded.
    let notifier = Arc::new(RecordingNotifier::new());
    let cycle = PollCycle::new(
        feeds_ab(),
        Arc::new(StaticVideoSource::new().with_latest("UC_a", VideoBuilder::new("v2").build())),
        Arc::clone(&notifier),
        Arc::new(JsonFileStore::new(state_path(&dir))),
    );
    cycle.run_once().await.unwrap();

    assert_eq!(notifier.announcements(), vec![("Feed A".to_string(), "v2".to_string())]);
    let record = JsonFileStore::new(state_path(&dir)).load().await.unwrap();
    assert_eq!(record.last_announced("Feed A"), Some("v2"));
}

#[tokio::test]
async fn upstream_failure_on_one_feed_does_not_block_others() {
    let dir = tempfile::tempdir().unwrap();
    let source = StaticVideoSource::new()
        .with_failure("UC_a")
        .with_latest("UC_b", VideoBuilder::new("b1").build());
    let notifier = Arc::new(RecordingNotifier::new());
    let cycle = PollCycle::new(
        feeds_ab(),
        Arc::new(source),
        Arc::clone(&notifier),
        Arc::new(JsonFileStore::new(state_path(&dir))),
    );

    let summary = cycle.run_once().await.unwrap();

    assert_eq!(summary.announced, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(notifier.announcements(), vec![("Feed B".to_string(), "b1".to_string())]);
}

#[tokio::test]
async fn newer_video_replaces_the_recorded_entry() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(&state_path(&dir), &[("Feed A", "v1")]).await;

    let notifier = Arc::new(RecordingNotifier::new());
    let cycle = PollCycle::new(
        feeds_ab(),
        Arc::new(StaticVideoSource::new().with_latest("UC_a", VideoBuilder::new("v2").build())),
        Arc::clone(&notifier),
        Arc::new(JsonFileStore::new(state_path(&dir))),
    );
    cycle.run_once().await.unwrap();

    assert_eq!(notifier.announcements(), vec![("Feed A".to_string(), "v2".to_string())]);
    let record = JsonFileStore::new(state_path(&dir)).load().await.unwrap();
    assert_eq!(record.last_announced("Feed A"), Some("v2"));
}

#[tokio::test]
async fn corrupt_state_aborts_the_cycle_before_any_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(state_path(&dir), "{definitely not json").unwrap();

    let notifier = Arc::new(RecordingNotifier::new());
    let cycle = PollCycle::new(
        feeds_ab(),
        Arc::new(StaticVideoSource::new().with_latest("UC_a", VideoBuilder::new("v1").build())),
        Arc::clone(&notifier),
        Arc::new(JsonFileStore::new(state_path(&dir))),
    );

    let result = cycle.run_once().await;

    assert!(result.is_err());
    assert!(notifier.announcements().is_empty());
}
