//! One complete pass over all registered feeds.

use std::sync::Arc;

use crate::{
    models::FeedConfig,
    notifier::Notifier,
    persistence::{error::StoreError, traits::AnnouncementStore},
    providers::VideoSource,
};

/// Outcome counters for one poll cycle, used for structured logging and test
/// assertions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    /// Announcements dispatched successfully.
    pub announced: usize,
    /// Feeds with nothing new: no video listed, or the latest video was
    /// already announced.
    pub skipped: usize,
    /// Feeds whose fetch or dispatch failed; they are retried next cycle.
    pub failed: usize,
}

/// Executes one poll cycle: for every registered feed, in declaration order,
/// fetch the latest video, announce it if it is new, and record what was
/// announced.
///
/// The announcement record is loaded at the start of the cycle and saved
/// exactly once at the end, after every feed has been processed. A feed's
/// entry is only advanced after its dispatch succeeded, so a failed dispatch
/// is retried on the next cycle instead of being lost.
pub struct PollCycle<S, N, A>
where
    S: VideoSource + ?Sized,
    N: Notifier + ?Sized,
    A: AnnouncementStore + ?Sized,
{
    /// Registered feeds in declaration order.
    feeds: Arc<Vec<FeedConfig>>,
    /// The upstream video listing provider.
    source: Arc<S>,
    /// The announcement dispatcher.
    notifier: Arc<N>,
    /// The durable announcement record.
    store: Arc<A>,
}

impl<S, N, A> PollCycle<S, N, A>
where
    S: VideoSource + ?Sized,
    N: Notifier + ?Sized,
    A: AnnouncementStore + ?Sized,
{
    /// Creates a new `PollCycle` instance.
    pub fn new(
        feeds: Arc<Vec<FeedConfig>>,
        source: Arc<S>,
        notifier: Arc<N>,
        store: Arc<A>,
    ) -> Self {
        Self { feeds, source, notifier, store }
    }

    /// Runs one cycle over all feeds.
    ///
    /// Fetch and dispatch failures are scoped to the feed that produced them;
    /// only a store failure aborts the cycle. A load failure aborts before
    /// any dispatch. A save failure aborts after: announcements already
    /// dispatched stand, and may be repeated next cycle because the record
    /// was not durably advanced (at-least-once delivery).
    pub async fn run_once(&self) -> Result<CycleSummary, StoreError> {
        let mut record = self.store.load().await?;
        let mut summary = CycleSummary::default();

        for feed in self.feeds.iter() {
            let video = match self.source.fetch_latest(&feed.channel_id).await {
                Ok(Some(video)) => video,
                Ok(None) => {
                    tracing::debug!(feed = %feed.name, "feed lists no announceable video");
                    summary.skipped += 1;
                    continue;
                }
                Err(error) => {
                    tracing::warn!(
                        feed = %feed.name,
                        error = %error,
                        "Failed to fetch latest video, skipping feed this cycle."
                    );
                    summary.failed += 1;
                    continue;
                }
            };

            if record.last_announced(&feed.name) == Some(video.id.as_str()) {
                tracing::debug!(feed = %feed.name, video_id = %video.id, "latest video already announced");
                summary.skipped += 1;
                continue;
            }

            match self.notifier.announce(feed, &video).await {
                Ok(()) => {
                    tracing::info!(
                        feed = %feed.name,
                        video_id = %video.id,
                        title = %video.title,
                        "Announced new video."
                    );
                    record.mark_announced(&feed.name, &video.id);
                    summary.announced += 1;
                }
                Err(error) => {
                    // The previous entry stays in place so the same video is
                    // retried on the next cycle.
                    tracing::warn!(
                        feed = %feed.name,
                        video_id = %video.id,
                        error = %error,
                        "Failed to announce new video."
                    );
                    summary.failed += 1;
                }
            }
        }

        self.store.save(&record).await?;

        Ok(summary)
    }
}
