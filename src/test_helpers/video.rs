use chrono::{DateTime, TimeZone, Utc};

use crate::models::Video;

/// A builder for creating `Video` instances for testing.
pub struct VideoBuilder {
    video: Video,
}

impl VideoBuilder {
    /// Creates a builder for a video with the given id and sensible defaults.
    pub fn new(id: &str) -> Self {
        Self {
            video: Video {
                id: id.to_string(),
                title: format!("Video {id}"),
                url: Video::watch_url(id),
                published_at: Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
            },
        }
    }

    /// Sets the video title.
    pub fn title(mut self, title: &str) -> Self {
        self.video.title = title.to_string();
        self
    }

    /// Sets the publication timestamp.
    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.video.published_at = published_at;
        self
    }

    /// Returns the finished `Video`.
    pub fn build(self) -> Video {
        self.video
    }
}
