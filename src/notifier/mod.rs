//! Dispatch of upload announcements to the messaging gateway.

mod discord;
pub mod error;
mod payload;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

pub use discord::DiscordNotifier;
pub use payload::build_announcement;

use crate::models::{FeedConfig, Video};
use error::NotifyError;

/// A sink for upload announcements.
///
/// Dispatch must complete (success or failure observed) before the caller
/// records the video as announced; there is no fire-and-forget path.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one announcement for `video` on behalf of `feed`.
    async fn announce(&self, feed: &FeedConfig, video: &Video) -> Result<(), NotifyError>;
}
