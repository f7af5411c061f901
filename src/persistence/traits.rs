//! This module contains the state management interface for announcements.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::error::StoreError;
use crate::models::AnnouncementRecord;

/// Durable storage of the announcement record.
///
/// One load and one save bracket every poll cycle; the store is never touched
/// concurrently because cycles never overlap.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// Retrieves the full announcement record, or an empty record when no
    /// state has been persisted yet.
    async fn load(&self) -> Result<AnnouncementRecord, StoreError>;

    /// Overwrites the full persisted state. Must be atomic with respect to
    /// process crash: a crash mid-save never leaves a half-written file.
    async fn save(&self, record: &AnnouncementRecord) -> Result<(), StoreError>;
}
