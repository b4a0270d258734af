//! Read-only storage ports consumed by the dashboard
//!
//! Every method returns owned collections; an absent relation is an empty
//! `Vec` or a zero count, never an error.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use reelscout_core::models::{
    Content, ContentId, ForumPost, ForumPostReport, ForumThread, PostId, ProductionCompanyId,
    ThreadId,
};
use reelscout_core::Result;
use std::collections::HashMap;

pub use memory::{CallCounts, FailingCall, InMemoryStore};
pub use postgres::{PostgresContentRepository, PostgresForumRepository, PostgresWatchlistRepository};

/// Catalog lookups
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// All content owned by a production company. Unknown companies yield an empty list.
    async fn find_by_owner(&self, company_id: ProductionCompanyId) -> Result<Vec<Content>>;
}

/// Forum lookups, keyed by parent ids
#[async_trait]
pub trait ForumRepository: Send + Sync {
    async fn find_threads_by_content_in(&self, content_ids: &[ContentId])
        -> Result<Vec<ForumThread>>;

    async fn find_posts_by_thread_in(&self, thread_ids: &[ThreadId]) -> Result<Vec<ForumPost>>;

    async fn find_reports_by_post_in(&self, post_ids: &[PostId]) -> Result<Vec<ForumPostReport>>;
}

/// Watchlist membership counts
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    /// Number of watchlists that contain the content item
    async fn count_containing(&self, content_id: ContentId) -> Result<i64>;

    /// Batched form of [`count_containing`](Self::count_containing)
    ///
    /// The returned map has an entry for every requested id. The default
    /// issues one lookup per id.
    async fn count_containing_many(
        &self,
        content_ids: &[ContentId],
    ) -> Result<HashMap<ContentId, i64>> {
        let mut counts = HashMap::with_capacity(content_ids.len());
        for &content_id in content_ids {
            let count = self.count_containing(content_id).await?;
            counts.insert(content_id, count);
        }
        Ok(counts)
    }
}
