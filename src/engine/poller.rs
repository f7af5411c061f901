//! The interval scheduler driving repeated poll cycles.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::poll_cycle::PollCycle;
use crate::{notifier::Notifier, persistence::traits::AnnouncementStore, providers::VideoSource};

/// Runs poll cycles on a fixed interval until cancelled.
///
/// The first cycle fires immediately at startup; every following cycle fires
/// one interval after the previous cycle *finished*, so a slow cycle never
/// causes back-to-back re-firing. Cycles cannot overlap: the cycle future is
/// awaited inline by the single scheduler loop.
pub struct Poller<S, N, A>
where
    S: VideoSource + ?Sized,
    N: Notifier + ?Sized,
    A: AnnouncementStore + ?Sized,
{
    /// The cycle executed on every tick.
    cycle: PollCycle<S, N, A>,
    /// Idle time between the end of one cycle and the start of the next.
    poll_interval: Duration,
    /// A token used to signal a graceful shutdown.
    cancellation_token: CancellationToken,
}

impl<S, N, A> Poller<S, N, A>
where
    S: VideoSource + ?Sized,
    N: Notifier + ?Sized,
    A: AnnouncementStore + ?Sized,
{
    /// Creates a new Poller instance.
    pub fn new(
        cycle: PollCycle<S, N, A>,
        poll_interval: Duration,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self { cycle, poll_interval, cancellation_token }
    }

    /// Starts the long-running scheduler loop.
    ///
    /// No cycle error terminates the loop; every failure is logged and the
    /// next tick proceeds as scheduled.
    pub async fn run(self) {
        loop {
            if self.cancellation_token.is_cancelled() {
                break;
            }

            match self.cycle.run_once().await {
                Ok(summary) => {
                    tracing::info!(
                        announced = summary.announced,
                        skipped = summary.skipped,
                        failed = summary.failed,
                        "Poll cycle complete."
                    );
                }
                Err(error) => {
                    tracing::error!(error = %error, "Poll cycle aborted. Retrying on next tick...");
                }
            }

            let idle = tokio::time::sleep(self.poll_interval);

            tokio::select! {
                biased;

                _ = self.cancellation_token.cancelled() => {
                    tracing::info!("Poller cancellation signal received, shutting down...");
                    break;
                }

                _ = idle => {}
            }
        }
        tracing::info!("Poller has shut down.");
    }
}
