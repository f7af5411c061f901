//! Discord implementation of the announcement dispatcher.
//!
//! Announcements are posted to the channel-messages REST endpoint with the
//! process-wide bot credential; the gateway's success status is the only
//! confirmation of delivery.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use super::{error::NotifyError, payload::build_announcement, Notifier};
use crate::models::{FeedConfig, Video};

/// Posts upload announcements to a single Discord channel.
pub struct DiscordNotifier {
    /// Configured HTTP client with retry capabilities.
    http_client: Arc<ClientWithMiddleware>,
    /// Base URL of the REST API, e.g. `https://discord.com/api/v10/`.
    api_base: Url,
    /// Process-wide bot credential.
    bot_token: String,
    /// Destination channel id.
    channel_id: String,
}

impl DiscordNotifier {
    /// Creates a new `DiscordNotifier`.
    pub fn new(
        http_client: Arc<ClientWithMiddleware>,
        api_base: Url,
        bot_token: String,
        channel_id: String,
    ) -> Self {
        Self { http_client, api_base, bot_token, channel_id }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    #[tracing::instrument(
        skip(self, feed, video),
        fields(feed = %feed.name, video_id = %video.id),
        level = "debug"
    )]
    async fn announce(&self, feed: &FeedConfig, video: &Video) -> Result<(), NotifyError> {
        let url = self.api_base.join(&format!("channels/{}/messages", self.channel_id))?;
        let payload = build_announcement(feed, video);

        let response = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, format!("Bot {}", self.bot_token))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected(status));
        }

        Ok(())
    }
}
