use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;

/// Creates a plain HTTP client without retry middleware, so tests exercising
/// failure paths do not wait out backoff delays.
pub fn create_test_http_client() -> Arc<ClientWithMiddleware> {
    Arc::new(reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build())
}
