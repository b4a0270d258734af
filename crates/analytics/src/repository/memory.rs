//! In-memory port implementations for tests and local demos
//!
//! Every port call is counted so callers can assert which queries ran.

use async_trait::async_trait;
use reelscout_core::models::{
    Content, ContentId, ForumPost, ForumPostReport, ForumThread, PostId, ProductionCompanyId,
    ThreadId,
};
use reelscout_core::{ReelScoutError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ContentRepository, ForumRepository, WatchlistRepository};

/// Snapshot of how many times each port method was called
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub contents: usize,
    pub threads: usize,
    pub posts: usize,
    pub reports: usize,
    pub watchlist_counts: usize,
}

#[derive(Default)]
struct Counters {
    contents: AtomicUsize,
    threads: AtomicUsize,
    posts: AtomicUsize,
    reports: AtomicUsize,
    watchlist_counts: AtomicUsize,
}

/// Port method that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingCall {
    Contents,
    Threads,
    Posts,
    Reports,
    WatchlistCounts,
}

/// Fixed data set serving all three dashboard ports
#[derive(Default)]
pub struct InMemoryStore {
    contents: Vec<Content>,
    threads: Vec<ForumThread>,
    posts: Vec<ForumPost>,
    reports: Vec<ForumPostReport>,
    saves: HashMap<ContentId, i64>,
    failing: Option<FailingCall>,
    counters: Counters,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.contents.push(content);
        self
    }

    pub fn with_thread(mut self, thread: ForumThread) -> Self {
        self.threads.push(thread);
        self
    }

    pub fn with_post(mut self, post: ForumPost) -> Self {
        self.posts.push(post);
        self
    }

    pub fn with_report(mut self, report: ForumPostReport) -> Self {
        self.reports.push(report);
        self
    }

    /// Set the number of watchlists containing `content_id`
    pub fn with_saves(mut self, content_id: ContentId, count: i64) -> Self {
        self.saves.insert(content_id, count);
        self
    }

    /// Make one port method return a database error
    pub fn failing_on(mut self, call: FailingCall) -> Self {
        self.failing = Some(call);
        self
    }

    pub fn call_counts(&self) -> CallCounts {
        CallCounts {
            contents: self.counters.contents.load(Ordering::SeqCst),
            threads: self.counters.threads.load(Ordering::SeqCst),
            posts: self.counters.posts.load(Ordering::SeqCst),
            reports: self.counters.reports.load(Ordering::SeqCst),
            watchlist_counts: self.counters.watchlist_counts.load(Ordering::SeqCst),
        }
    }

    fn check(&self, call: FailingCall) -> Result<()> {
        if self.failing == Some(call) {
            return Err(ReelScoutError::DatabaseError(format!(
                "simulated failure in {:?}",
                call
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for InMemoryStore {
    async fn find_by_owner(&self, company_id: ProductionCompanyId) -> Result<Vec<Content>> {
        self.counters.contents.fetch_add(1, Ordering::SeqCst);
        self.check(FailingCall::Contents)?;

        Ok(self
            .contents
            .iter()
            .filter(|c| c.production_company_id == company_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ForumRepository for InMemoryStore {
    async fn find_threads_by_content_in(
        &self,
        content_ids: &[ContentId],
    ) -> Result<Vec<ForumThread>> {
        self.counters.threads.fetch_add(1, Ordering::SeqCst);
        self.check(FailingCall::Threads)?;

        Ok(self
            .threads
            .iter()
            .filter(|t| content_ids.contains(&t.content_id))
            .cloned()
            .collect())
    }

    async fn find_posts_by_thread_in(&self, thread_ids: &[ThreadId]) -> Result<Vec<ForumPost>> {
        self.counters.posts.fetch_add(1, Ordering::SeqCst);
        self.check(FailingCall::Posts)?;

        Ok(self
            .posts
            .iter()
            .filter(|p| thread_ids.contains(&p.thread_id))
            .cloned()
            .collect())
    }

    async fn find_reports_by_post_in(&self, post_ids: &[PostId]) -> Result<Vec<ForumPostReport>> {
        self.counters.reports.fetch_add(1, Ordering::SeqCst);
        self.check(FailingCall::Reports)?;

        Ok(self
            .reports
            .iter()
            .filter(|r| post_ids.contains(&r.post_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl WatchlistRepository for InMemoryStore {
    async fn count_containing(&self, content_id: ContentId) -> Result<i64> {
        self.counters.watchlist_counts.fetch_add(1, Ordering::SeqCst);
        self.check(FailingCall::WatchlistCounts)?;

        Ok(self.saves.get(&content_id).copied().unwrap_or(0))
    }
}
