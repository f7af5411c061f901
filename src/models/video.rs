use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The most recent upload of a feed, as reported by the video provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Provider-assigned video id. Equality on this id is the sole dedupe
    /// test.
    pub id: String,
    /// Video title.
    pub title: String,
    /// Public watch URL.
    pub url: String,
    /// Publication timestamp reported by the provider.
    pub published_at: DateTime<Utc>,
}

impl Video {
    /// Builds the public watch URL for a video id.
    pub fn watch_url(video_id: &str) -> String {
        format!("https://youtu.be/{video_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_points_at_short_link() {
        assert_eq!(Video::watch_url("abc123"), "https://youtu.be/abc123");
    }
}
