//! Hand-written fakes for the integration seams, usable from `tests/` where
//! the mockall mocks (compiled only under `cfg(test)` of this crate) are not.

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;

use crate::{
    models::{FeedConfig, Video},
    notifier::{error::NotifyError, Notifier},
    providers::{SourceError, VideoSource},
};

/// A `VideoSource` returning canned results keyed by channel id.
///
/// Channels without a canned video answer `Ok(None)`; channels registered via
/// [`StaticVideoSource::with_failure`] answer an upstream error.
#[derive(Default)]
pub struct StaticVideoSource {
    latest: HashMap<String, Video>,
    failing: HashSet<String>,
}

impl StaticVideoSource {
    /// Creates a source that answers `Ok(None)` for every channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the latest video of a channel.
    pub fn with_latest(mut self, channel_id: &str, video: Video) -> Self {
        self.latest.insert(channel_id.to_string(), video);
        self
    }

    /// Makes fetches for a channel fail with an upstream error.
    pub fn with_failure(mut self, channel_id: &str) -> Self {
        self.failing.insert(channel_id.to_string());
        self
    }
}

#[async_trait]
impl VideoSource for StaticVideoSource {
    async fn fetch_latest(&self, channel_id: &str) -> Result<Option<Video>, SourceError> {
        if self.failing.contains(channel_id) {
            return Err(SourceError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(self.latest.get(channel_id).cloned())
    }
}

/// A `Notifier` that records every successful announcement in order.
#[derive(Default)]
pub struct RecordingNotifier {
    announcements: Mutex<Vec<(String, String)>>,
    failing_feeds: HashSet<String>,
}

impl RecordingNotifier {
    /// Creates a notifier that accepts every announcement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes announcements for the named feed fail.
    pub fn failing_for(mut self, feed_name: &str) -> Self {
        self.failing_feeds.insert(feed_name.to_string());
        self
    }

    /// Returns the recorded `(feed name, video id)` pairs in dispatch order.
    pub fn announcements(&self) -> Vec<(String, String)> {
        self.announcements.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn announce(&self, feed: &FeedConfig, video: &Video) -> Result<(), NotifyError> {
        if self.failing_feeds.contains(&feed.name) {
            return Err(NotifyError::Rejected(reqwest::StatusCode::BAD_GATEWAY));
        }
        self.announcements.lock().unwrap().push((feed.name.clone(), video.id.clone()));
        Ok(())
    }
}
