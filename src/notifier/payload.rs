//! Builds the channel-specific JSON payload for an upload announcement.

use serde_json::json;

use crate::models::{FeedConfig, Video};

/// Builds the Discord message payload for one announcement: a single embed
/// carrying the video link, the feed's accent color and thumbnail, and the
/// upload timestamp.
pub fn build_announcement(feed: &FeedConfig, video: &Video) -> serde_json::Value {
    json!({
        "embeds": [{
            "title": format!("📢 New {} Video!", feed.name),
            "description": format!("[{}]({})", video.title, video.url),
            "color": feed.color,
            "timestamp": video.published_at.to_rfc3339(),
            "thumbnail": { "url": feed.thumbnail_url(&video.id) },
            "footer": { "text": format!("{} | Uploaded", feed.name) },
        }]
    })
}
