//! This module provides the `SupervisorBuilder` for constructing a
//! `Supervisor`.

use std::sync::Arc;

use crate::{
    config::{AppConfig, FeedLoader},
    notifier::Notifier,
    persistence::traits::AnnouncementStore,
    providers::VideoSource,
};

use super::{Supervisor, SupervisorError};

/// A builder for creating a `Supervisor` instance.
#[derive(Default)]
pub struct SupervisorBuilder {
    config: Option<AppConfig>,
    source: Option<Arc<dyn VideoSource>>,
    notifier: Option<Arc<dyn Notifier>>,
    store: Option<Arc<dyn AnnouncementStore>>,
}

impl SupervisorBuilder {
    /// Creates a new, empty `SupervisorBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application configuration for the `Supervisor`.
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the video source for the `Supervisor`.
    pub fn source(mut self, source: Arc<dyn VideoSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the announcement notifier for the `Supervisor`.
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Sets the announcement store for the `Supervisor`.
    pub fn store(mut self, store: Arc<dyn AnnouncementStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Assembles and validates the components to build a `Supervisor`.
    ///
    /// This method performs the final "wiring" of the application's services.
    /// It ensures all required dependencies have been provided and loads the
    /// feed registry, which fixes the order feeds are checked in.
    pub fn build(self) -> Result<Supervisor, SupervisorError> {
        let config = self.config.ok_or(SupervisorError::MissingConfig)?;
        let source = self.source.ok_or(SupervisorError::MissingSource)?;
        let notifier = self.notifier.ok_or(SupervisorError::MissingNotifier)?;
        let store = self.store.ok_or(SupervisorError::MissingStore)?;

        tracing::debug!(path = %config.feeds_config_path.display(), "Loading feed registry...");
        let feeds = FeedLoader::new(config.feeds_config_path.clone()).load()?;
        if feeds.is_empty() {
            return Err(SupervisorError::InvalidConfiguration(
                "feed registry defines no feeds".to_string(),
            ));
        }
        tracing::info!(count = feeds.len(), "Loaded feed registry.");

        Ok(Supervisor::new(config, feeds, source, notifier, store))
    }
}
