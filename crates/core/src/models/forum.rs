//! Forum models: threads attached to content, posts in threads, reports on posts

use super::content::ContentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ThreadId = i64;
pub type PostId = i64;
pub type ReportId = i64;

/// Discussion thread about one content item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ForumThread {
    pub id: ThreadId,
    pub content_id: ContentId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post inside a thread
///
/// `created_at` is always set on insert; it is optional here only because
/// legacy rows may lack it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ForumPost {
    pub id: PostId,
    pub thread_id: ThreadId,
    pub created_at: Option<DateTime<Utc>>,
}

/// Moderation report filed against a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ForumPostReport {
    pub id: ReportId,
    pub post_id: PostId,
    pub reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
