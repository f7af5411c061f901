//! YouTube Data API v3 implementation of the video source.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use url::Url;

use super::traits::{SourceError, VideoSource};
use crate::models::Video;

/// Fetches the newest upload of a channel via the `search` endpoint, ordered
/// by publish date and limited to a single result.
pub struct YouTubeSource {
    /// Configured HTTP client with retry capabilities.
    http_client: Arc<ClientWithMiddleware>,
    /// Base URL of the API, e.g. `https://www.googleapis.com/youtube/v3/`.
    api_base: Url,
    /// Process-wide API key.
    api_key: String,
}

/// Response shape of the `search` endpoint, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    // Absent when the newest search result is a channel or playlist.
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    title: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

impl YouTubeSource {
    /// Creates a new `YouTubeSource`.
    pub fn new(http_client: Arc<ClientWithMiddleware>, api_base: Url, api_key: String) -> Self {
        Self { http_client, api_base, api_key }
    }
}

#[async_trait]
impl VideoSource for YouTubeSource {
    #[tracing::instrument(skip(self), level = "debug")]
    async fn fetch_latest(&self, channel_id: &str) -> Result<Option<Video>, SourceError> {
        let url = self.api_base.join("search")?;

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("channelId", channel_id),
                ("part", "snippet,id"),
                ("order", "date"),
                ("maxResults", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let body: SearchResponse = response.json().await?;

        let Some(item) = body.items.into_iter().next() else {
            tracing::debug!(channel_id, "channel lists no items");
            return Ok(None);
        };
        let Some(video_id) = item.id.video_id else {
            tracing::debug!(channel_id, "newest listing entry is not a video");
            return Ok(None);
        };

        let url = Video::watch_url(&video_id);
        Ok(Some(Video {
            id: video_id,
            title: item.snippet.title,
            url,
            published_at: item.snippet.published_at,
        }))
    }
}
