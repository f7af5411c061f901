use std::time::Duration;

use serde::Deserialize;

use super::helpers::deserialize_duration_from_seconds;

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

/// Tuning for the base HTTP client shared by the video provider and the
/// messaging gateway. Both timeouts are bounded so one unresponsive endpoint
/// cannot stall a poll cycle indefinitely.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BaseHttpClientConfig {
    /// Maximum time to establish a connection, in seconds.
    #[serde(
        default = "default_connect_timeout",
        deserialize_with = "deserialize_duration_from_seconds"
    )]
    pub connect_timeout: Duration,
    /// Maximum total time for a single request attempt, in seconds.
    #[serde(
        default = "default_request_timeout",
        deserialize_with = "deserialize_duration_from_seconds"
    )]
    pub request_timeout: Duration,
}

impl Default for BaseHttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
        }
    }
}
