//! The Supervisor module manages the lifecycle of the Herald application.
//!
//! It owns the wired components, spawns the poller and the signal handler,
//! and orchestrates a clean shutdown when the process receives SIGINT or
//! SIGTERM.

mod builder;

use std::sync::Arc;

use builder::SupervisorBuilder;
use thiserror::Error;
use tokio::signal;

use crate::{
    config::{AppConfig, FeedLoaderError},
    engine::{PollCycle, Poller},
    models::FeedConfig,
    notifier::Notifier,
    persistence::traits::AnnouncementStore,
    providers::VideoSource,
};

/// Represents the set of errors that can occur during the supervisor's
/// operation.
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// A required configuration was not provided to the `SupervisorBuilder`.
    #[error("Missing configuration for Supervisor")]
    MissingConfig,

    /// An announcement store was not provided to the `SupervisorBuilder`.
    #[error("Missing announcement store for Supervisor")]
    MissingStore,

    /// A video source was not provided to the `SupervisorBuilder`.
    #[error("Missing video source for Supervisor")]
    MissingSource,

    /// A notifier was not provided to the `SupervisorBuilder`.
    #[error("Missing notifier for Supervisor")]
    MissingNotifier,

    /// An error occurred while loading the feed registry.
    #[error("Failed to load feed registry: {0}")]
    FeedLoad(#[from] FeedLoaderError),

    /// An error occurred due to an invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// The primary runtime manager for the application.
///
/// The Supervisor owns the wired components and is responsible for startup,
/// shutdown, and task health. Once `run` is called, it becomes the main
/// process loop for the entire application.
pub struct Supervisor {
    /// Shared application configuration.
    config: Arc<AppConfig>,

    /// Registered feeds in declaration order.
    feeds: Arc<Vec<FeedConfig>>,

    /// The upstream video listing provider.
    source: Arc<dyn VideoSource>,

    /// The announcement dispatcher.
    notifier: Arc<dyn Notifier>,

    /// The durable announcement record.
    store: Arc<dyn AnnouncementStore>,

    /// A token used to signal a graceful shutdown to all supervised tasks.
    cancellation_token: tokio_util::sync::CancellationToken,

    /// A set of all spawned tasks that the supervisor is actively managing.
    join_set: tokio::task::JoinSet<()>,
}

impl Supervisor {
    /// Creates a new Supervisor instance with all its required components.
    ///
    /// This is typically called by the `SupervisorBuilder` after it has
    /// assembled all the necessary dependencies.
    pub fn new(
        config: AppConfig,
        feeds: Vec<FeedConfig>,
        source: Arc<dyn VideoSource>,
        notifier: Arc<dyn Notifier>,
        store: Arc<dyn AnnouncementStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            feeds: Arc::new(feeds),
            source,
            notifier,
            store,
            cancellation_token: tokio_util::sync::CancellationToken::new(),
            join_set: tokio::task::JoinSet::new(),
        }
    }

    /// Starts the supervisor and all its managed services.
    ///
    /// Spawns a signal handler for `SIGINT` (Ctrl+C) and `SIGTERM`, spawns the
    /// poller as a long-running task, then monitors task health until a
    /// shutdown is requested or a critical task fails.
    pub async fn run(mut self) -> Result<(), SupervisorError> {
        // Clone the token for the signal handler task.
        let cancellation_token = self.cancellation_token.clone();

        // Spawn a task to listen for shutdown signals.
        self.join_set.spawn(async move {
            let ctrl_c = signal::ctrl_c();
            #[cfg(unix)]
            let terminate = async {
                signal::unix::signal(signal::unix::SignalKind::terminate())
                    .expect("Failed to register SIGTERM handler")
                    .recv()
                    .await;
            };
            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                _ = ctrl_c => tracing::info!("SIGINT (Ctrl+C) received, initiating graceful shutdown."),
                _ = terminate => tracing::info!("SIGTERM received, initiating graceful shutdown."),
            }

            // Notify all other tasks to begin shutting down.
            cancellation_token.cancel();
        });

        // Spawn the poller service.
        let cycle = PollCycle::new(
            Arc::clone(&self.feeds),
            Arc::clone(&self.source),
            Arc::clone(&self.notifier),
            Arc::clone(&self.store),
        );
        let poller =
            Poller::new(cycle, self.config.poll_interval_secs, self.cancellation_token.clone());
        self.join_set.spawn(async move {
            poller.run().await;
        });

        // --- Main Supervisor Loop ---

        loop {
            tokio::select! {
                maybe_result = self.join_set.join_next() => {
                    match maybe_result {
                        Some(Ok(_)) => {
                            // Task completed successfully, continue monitoring.
                        }
                        Some(Err(e)) => {
                            tracing::error!("A critical task failed: {:?}. Initiating shutdown.", e);
                            self.cancellation_token.cancel();
                        }
                        None => {
                            // All tasks have completed.
                            break;
                        }
                    }
                }
                _ = self.cancellation_token.cancelled() => {
                    // Cancellation requested externally, break the loop.
                    break;
                }
            }
        }

        // Ensure all spawned tasks are properly awaited before returning.
        self.join_set.shutdown().await;
        tracing::info!("All supervised tasks have completed.");

        tracing::info!("Supervisor shutdown complete.");
        Ok(())
    }

    /// Returns a new `SupervisorBuilder` instance.
    ///
    /// This is the public entry point for creating a supervisor.
    pub fn builder() -> SupervisorBuilder {
        SupervisorBuilder::new()
    }
}
