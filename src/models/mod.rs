//! Core data types shared across the application.

mod feed;
mod record;
mod video;

pub use feed::FeedConfig;
pub use record::{AnnouncementRecord, SCHEMA_VERSION};
pub use video::Video;
