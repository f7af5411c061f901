use serde::{Deserialize, Serialize};

use crate::config::deserialize_color;

/// A single watched feed: a named YouTube channel plus the presentation
/// metadata used when announcing its uploads.
///
/// The name is the unique registry key and the unit of deduplication; the
/// channel id only tells the fetcher where to look.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedConfig {
    /// Unique display name of the feed.
    pub name: String,
    /// YouTube channel id queried for new uploads.
    pub channel_id: String,
    /// Accent color of the announcement embed.
    #[serde(deserialize_with = "deserialize_color")]
    pub color: u32,
    /// Thumbnail URL template containing the `{video_id}` placeholder.
    pub thumbnail_template: String,
}

impl FeedConfig {
    /// Placeholder substituted with the video id in `thumbnail_template`.
    pub const VIDEO_ID_PLACEHOLDER: &'static str = "{video_id}";

    /// Renders the thumbnail URL for a concrete video.
    pub fn thumbnail_url(&self, video_id: &str) -> String {
        self.thumbnail_template.replace(Self::VIDEO_ID_PLACEHOLDER, video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_url_substitutes_video_id() {
        let feed = FeedConfig {
            name: "Test Feed".to_string(),
            channel_id: "UC_test".to_string(),
            color: 0x00A67C,
            thumbnail_template: "https://i.ytimg.com/vi/{video_id}/maxresdefault.jpg".to_string(),
        };

        assert_eq!(
            feed.thumbnail_url("dQw4w9WgXcQ"),
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
    }
}
