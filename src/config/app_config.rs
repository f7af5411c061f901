use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use super::{deserialize_duration_from_seconds, BaseHttpClientConfig, HttpRetryConfig};

/// Provides the default value for poll_interval_secs (two hours).
fn default_poll_interval() -> Duration {
    Duration::from_secs(7200)
}

/// Provides the default path of the announcement state file.
fn default_state_file() -> PathBuf {
    PathBuf::from("last_videos.json")
}

/// Provides the default base URL of the video listing API.
fn default_youtube_api_base() -> Url {
    Url::parse("https://www.googleapis.com/youtube/v3/").expect("static URL is valid")
}

/// Provides the default base URL of the messaging gateway API.
fn default_discord_api_base() -> Url {
    Url::parse("https://discord.com/api/v10/").expect("static URL is valid")
}

/// Application configuration for Herald.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Discord channel that receives upload announcements.
    pub channel_id: String,

    /// Seconds between poll cycles, measured from the end of the previous
    /// cycle.
    #[serde(
        default = "default_poll_interval",
        deserialize_with = "deserialize_duration_from_seconds"
    )]
    pub poll_interval_secs: Duration,

    /// Path of the JSON file recording the last announced video per feed.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// YouTube Data API key. Usually supplied as `HERALD__YOUTUBE_API_KEY`.
    #[serde(default)]
    pub youtube_api_key: String,

    /// Discord bot token. Usually supplied as `HERALD__DISCORD_BOT_TOKEN`.
    #[serde(default)]
    pub discord_bot_token: String,

    /// Configuration for HTTP client retry policies.
    #[serde(default)]
    pub http_retry_config: HttpRetryConfig,

    /// Configuration for the base HTTP client.
    #[serde(default)]
    pub http_base_config: BaseHttpClientConfig,

    /// Base URL of the video listing API.
    #[serde(default = "default_youtube_api_base")]
    pub youtube_api_base: Url,

    /// Base URL of the messaging gateway API.
    #[serde(default = "default_discord_api_base")]
    pub discord_api_base: Url,

    /// Path to the feed registry file.
    #[serde(skip_deserializing)]
    pub feeds_config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_id: String::new(),
            poll_interval_secs: default_poll_interval(),
            state_file: default_state_file(),
            youtube_api_key: String::new(),
            discord_bot_token: String::new(),
            http_retry_config: HttpRetryConfig::default(),
            http_base_config: BaseHttpClientConfig::default(),
            youtube_api_base: default_youtube_api_base(),
            discord_api_base: default_discord_api_base(),
            feeds_config_path: PathBuf::new(),
        }
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration directory.
    ///
    /// Settings come from `app.yaml` merged with `HERALD__`-prefixed
    /// environment variables; credentials are validated here so a missing one
    /// fails at startup rather than on the first outbound call.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/app.yaml", config_dir_str)))
            .add_source(Environment::with_prefix("HERALD").separator("__"))
            .build()?;
        let mut config: Self = s.try_deserialize()?;

        // The feed registry lives next to app.yaml.
        config.feeds_config_path = Path::new(config_dir_str).join("feeds.yaml");

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_id.trim().is_empty() {
            return Err(ConfigError::Message("channel_id must be set".to_string()));
        }
        if self.youtube_api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "youtube_api_key must be set (e.g. via HERALD__YOUTUBE_API_KEY)".to_string(),
            ));
        }
        if self.discord_bot_token.trim().is_empty() {
            return Err(ConfigError::Message(
                "discord_bot_token must be set (e.g. via HERALD__DISCORD_BOT_TOKEN)".to_string(),
            ));
        }
        if self.poll_interval_secs.is_zero() {
            return Err(ConfigError::Message(
                "poll_interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Creates a new `AppConfigBuilder` for testing purposes.
    #[cfg(test)]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// A builder for creating `AppConfig` instances for testing.
#[cfg(test)]
#[derive(Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn channel_id(mut self, channel_id: &str) -> Self {
        self.config.channel_id = channel_id.to_string();
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval_secs = interval;
        self
    }

    pub fn state_file(mut self, path: &str) -> Self {
        self.config.state_file = path.into();
        self
    }

    pub fn youtube_api_key(mut self, key: &str) -> Self {
        self.config.youtube_api_key = key.to_string();
        self
    }

    pub fn discord_bot_token(mut self, token: &str) -> Self {
        self.config.discord_bot_token = token.to_string();
        self
    }

    pub fn feeds_config_path(mut self, path: &str) -> Self {
        self.config.feeds_config_path = path.into();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
