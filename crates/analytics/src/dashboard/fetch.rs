//! Fetch stage: load the chain content → threads → posts → reports
//!
//! Each step only runs when its parent collection is non-empty.

use reelscout_core::models::{
    Content, ContentId, ForumPost, ForumPostReport, ForumThread, PostId, ProductionCompanyId,
    ThreadId,
};
use reelscout_core::Result;
use std::collections::HashMap;
use tracing::debug;

use crate::repository::{ContentRepository, ForumRepository, WatchlistRepository};

/// Everything the aggregation stages read, fetched once per request
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub contents: Vec<Content>,
    pub threads: Vec<ForumThread>,
    pub posts: Vec<ForumPost>,
    pub reports: Vec<ForumPostReport>,
    /// Watchlist count per owned content; one entry per content item
    pub saves: HashMap<ContentId, i64>,
}

impl DashboardSnapshot {
    /// Save count for one content item, 0 when unknown
    pub fn saves_for(&self, content_id: ContentId) -> i64 {
        self.saves.get(&content_id).copied().unwrap_or(0)
    }
}

/// Load the forum chain for a production company's catalog
pub async fn fetch_snapshot(
    contents_repo: &dyn ContentRepository,
    forum_repo: &dyn ForumRepository,
    watchlist_repo: &dyn WatchlistRepository,
    company_id: ProductionCompanyId,
) -> Result<DashboardSnapshot> {
    let contents = contents_repo.find_by_owner(company_id).await?;
    if contents.is_empty() {
        debug!(company_id, "No content owned; skipping forum and watchlist queries");
        return Ok(DashboardSnapshot::default());
    }

    let content_ids: Vec<ContentId> = contents.iter().map(|c| c.id).collect();
    let saves = watchlist_repo.count_containing_many(&content_ids).await?;

    let threads = forum_repo.find_threads_by_content_in(&content_ids).await?;
    debug!(company_id, contents = contents.len(), threads = threads.len(), "Fetched threads");
    if threads.is_empty() {
        return Ok(DashboardSnapshot {
            contents,
            saves,
            ..Default::default()
        });
    }

    let thread_ids: Vec<ThreadId> = threads.iter().map(|t| t.id).collect();
    let posts = forum_repo.find_posts_by_thread_in(&thread_ids).await?;
    debug!(company_id, posts = posts.len(), "Fetched posts");
    if posts.is_empty() {
        return Ok(DashboardSnapshot {
            contents,
            threads,
            saves,
            ..Default::default()
        });
    }

    let post_ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
    let reports = forum_repo.find_reports_by_post_in(&post_ids).await?;
    debug!(company_id, reports = reports.len(), "Fetched reports");

    Ok(DashboardSnapshot {
        contents,
        threads,
        posts,
        reports,
        saves,
    })
}
