use std::{collections::HashSet, fs, path::PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::FeedConfig;

/// Container for feed configurations loaded from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedRegistryFile {
    /// Feed definitions in declaration order.
    pub feeds: Vec<FeedConfig>,
}

/// Loads the feed registry from a file.
///
/// The sequence order of the file is preserved; it fixes the order in which
/// feeds are checked and announced within a poll cycle.
pub struct FeedLoader {
    path: PathBuf,
}

/// Errors that can occur while loading the feed registry.
#[derive(Debug, Error)]
pub enum FeedLoaderError {
    /// Error when reading the feed registry file.
    #[error("Failed to load feed registry: {0}")]
    IoError(std::io::Error),

    /// Error when parsing the feed registry file.
    #[error("Failed to parse feed registry: {0}")]
    ParseError(String),

    /// Error when the feed registry format is unsupported.
    #[error("Unsupported feed registry format")]
    UnsupportedFormat,

    /// A feed definition failed validation.
    #[error("Invalid feed registry: {0}")]
    Invalid(String),
}

impl FeedLoader {
    /// Creates a new `FeedLoader` instance.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads and validates the feed registry from the specified file.
    pub fn load(&self) -> Result<Vec<FeedConfig>, FeedLoaderError> {
        // Validate YAML extension
        if !self.is_yaml_file() {
            return Err(FeedLoaderError::UnsupportedFormat);
        }

        let config_str = fs::read_to_string(&self.path).map_err(FeedLoaderError::IoError)?;
        let registry: FeedRegistryFile = Config::builder()
            .add_source(File::from_str(&config_str, config::FileFormat::Yaml))
            .build()
            .map_err(|e| FeedLoaderError::ParseError(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FeedLoaderError::ParseError(e.to_string()))?;

        let feeds = registry.feeds;
        let mut seen_names = HashSet::new();
        for feed in &feeds {
            if feed.name.trim().is_empty() {
                return Err(FeedLoaderError::Invalid("feed name must not be empty".to_string()));
            }
            if feed.channel_id.trim().is_empty() {
                return Err(FeedLoaderError::Invalid(format!(
                    "feed '{}' has an empty channel id",
                    feed.name
                )));
            }
            if !feed.thumbnail_template.contains(FeedConfig::VIDEO_ID_PLACEHOLDER) {
                return Err(FeedLoaderError::Invalid(format!(
                    "feed '{}' thumbnail template is missing the '{}' placeholder",
                    feed.name,
                    FeedConfig::VIDEO_ID_PLACEHOLDER
                )));
            }
            // The feed name, not the channel id, is the dedupe key. Two feeds
            // may share a channel id and are tracked independently.
            if !seen_names.insert(feed.name.as_str()) {
                return Err(FeedLoaderError::Invalid(format!(
                    "duplicate feed name '{}'",
                    feed.name
                )));
            }
        }

        Ok(feeds)
    }

    /// Checks if the file has a YAML extension.
    fn is_yaml_file(&self) -> bool {
        matches!(self.path.extension().and_then(|ext| ext.to_str()), Some("yaml") | Some("yml"))
    }
}
