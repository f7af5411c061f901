use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current schema version of the persisted announcement record.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// The durable memory of what has already been announced: one entry per feed
/// name, holding the id of the last video whose announcement was dispatched
/// successfully.
///
/// The record is loaded fresh at the start of every poll cycle and rewritten
/// in full at the end of the same cycle; it is never cached across cycles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnouncementRecord {
    /// Schema version of the serialized form. Files written before the field
    /// existed parse as the current version.
    #[serde(default = "default_schema_version")]
    pub version: u32,
    /// Last announced video id, keyed by feed name.
    #[serde(default)]
    pub feeds: BTreeMap<String, String>,
}

impl Default for AnnouncementRecord {
    fn default() -> Self {
        Self { version: SCHEMA_VERSION, feeds: BTreeMap::new() }
    }
}

impl AnnouncementRecord {
    /// Returns the id of the last announced video for a feed, if any.
    pub fn last_announced(&self, feed_name: &str) -> Option<&str> {
        self.feeds.get(feed_name).map(String::as_str)
    }

    /// Records a successfully dispatched announcement for a feed.
    pub fn mark_announced(&mut self, feed_name: &str, video_id: &str) {
        self.feeds.insert(feed_name.to_string(), video_id.to_string());
    }

    /// Returns true when no announcement has ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty_and_current() {
        let record = AnnouncementRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.version, SCHEMA_VERSION);
        assert_eq!(record.last_announced("anything"), None);
    }

    #[test]
    fn mark_announced_overwrites_previous_entry() {
        let mut record = AnnouncementRecord::default();
        record.mark_announced("Feed A", "v1");
        record.mark_announced("Feed A", "v2");

        assert_eq!(record.last_announced("Feed A"), Some("v2"));
        assert_eq!(record.feeds.len(), 1);
    }

    #[test]
    fn record_without_version_field_parses_as_current() {
        let record: AnnouncementRecord =
            serde_json::from_str(r#"{"feeds": {"Feed A": "v1"}}"#).unwrap();

        assert_eq!(record.version, SCHEMA_VERSION);
        assert_eq!(record.last_announced("Feed A"), Some("v1"));
    }
}
