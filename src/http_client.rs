//! This module provides functionality to create a retryable HTTP client with
//! middleware for handling transient errors, such as network issues or rate
//! limiting.

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, Jitter, RetryTransientMiddleware};
use thiserror::Error;

use crate::config::{BaseHttpClientConfig, HttpRetryConfig, JitterSetting};

/// Errors that can occur while constructing the HTTP client.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// An error occurred while building the underlying `reqwest::Client`.
    #[error("Failed to create HTTP client: {0}")]
    Build(String),
}

/// Creates the retryable HTTP client shared by the video provider and the
/// messaging gateway.
///
/// Both the connect and the per-request timeout are bounded so a single
/// unresponsive endpoint surfaces as a per-feed failure instead of stalling
/// the whole poll cycle.
pub fn create_retryable_http_client(
    retry: &HttpRetryConfig,
    base: &BaseHttpClientConfig,
) -> Result<ClientWithMiddleware, HttpClientError> {
    // Determine the jitter setting and create the policy builder accordingly
    let policy_builder = match retry.jitter {
        JitterSetting::None => ExponentialBackoff::builder().jitter(Jitter::None),
        JitterSetting::Full => ExponentialBackoff::builder().jitter(Jitter::Full),
    };

    let retry_policy = policy_builder
        .base(retry.base_for_backoff)
        .retry_bounds(retry.initial_backoff_ms, retry.max_backoff_secs)
        .build_with_max_retries(retry.max_retries);

    let base_client = reqwest::Client::builder()
        .connect_timeout(base.connect_timeout)
        .timeout(base.request_timeout)
        .build()
        .map_err(|e| HttpClientError::Build(e.to_string()))?;

    Ok(ClientBuilder::new(base_client)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build())
}
