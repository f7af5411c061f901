//! Configuration module for Herald.

mod app_config;
mod feed_loader;
mod helpers;
mod http_base;
mod http_retry;

pub use app_config::AppConfig;
pub use feed_loader::{FeedLoader, FeedLoaderError};
pub use helpers::{deserialize_color, deserialize_duration_from_ms, deserialize_duration_from_seconds};
pub use http_base::BaseHttpClientConfig;
pub use http_retry::{HttpRetryConfig, JitterSetting};
