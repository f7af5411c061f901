use crate::models::FeedConfig;

/// A builder for creating `FeedConfig` instances for testing.
pub struct FeedBuilder {
    feed: FeedConfig,
}

impl FeedBuilder {
    /// Creates a builder for a feed with the given name and sensible defaults.
    pub fn new(name: &str) -> Self {
        Self {
            feed: FeedConfig {
                name: name.to_string(),
                channel_id: "UC_test".to_string(),
                color: 0x00A67C,
                thumbnail_template: "https://i.ytimg.com/vi/{video_id}/hqdefault.jpg".to_string(),
            },
        }
    }

    /// Sets the channel id.
    pub fn channel_id(mut self, channel_id: &str) -> Self {
        self.feed.channel_id = channel_id.to_string();
        self
    }

    /// Sets the embed accent color.
    pub fn color(mut self, color: u32) -> Self {
        self.feed.color = color;
        self
    }

    /// Sets the thumbnail URL template.
    pub fn thumbnail_template(mut self, template: &str) -> Self {
        self.feed.thumbnail_template = template.to_string();
        self
    }

    /// Returns the finished `FeedConfig`.
    pub fn build(self) -> FeedConfig {
        self.feed
    }
}
