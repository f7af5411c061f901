//! Error types for the announcement dispatcher.

use thiserror::Error;

/// Defines the possible errors that can occur while dispatching an
/// announcement.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Transport-level failure reaching the messaging gateway.
    #[error("Request to messaging gateway failed: {0}")]
    Request(#[from] reqwest_middleware::Error),

    /// The gateway rejected the announcement.
    #[error("Messaging gateway rejected the announcement with status {0}")]
    Rejected(reqwest::StatusCode),

    /// The message endpoint URL could not be constructed.
    #[error("Invalid messaging gateway endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}
