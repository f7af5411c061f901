//! This module defines the interface for fetching the most recent upload of a
//! feed.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::models::Video;

/// Custom error type for video listing operations.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport-level failure reaching the provider.
    #[error("Request to video provider failed: {0}")]
    Request(#[from] reqwest_middleware::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("Video provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// The provider answered successfully but the body could not be decoded.
    #[error("Failed to decode video provider response: {0}")]
    Decode(#[from] reqwest::Error),

    /// The listing endpoint URL could not be constructed.
    #[error("Invalid video provider endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// A source of the single most recent video per channel.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Returns the most recent video for `channel_id`, or `None` when the
    /// provider responds successfully but lists nothing announceable.
    ///
    /// Errors are scoped to one feed for one cycle; the caller skips the feed
    /// and tries again on the next cycle.
    async fn fetch_latest(&self, channel_id: &str) -> Result<Option<Video>, SourceError>;
}
