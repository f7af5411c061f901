//! A set of helpers for testing

mod fakes;
mod feed;
mod http_client;
mod video;

pub use fakes::{RecordingNotifier, StaticVideoSource};
pub use feed::FeedBuilder;
pub use http_client::create_test_http_client;
pub use video::VideoBuilder;
