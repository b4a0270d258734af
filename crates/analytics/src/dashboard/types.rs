use reelscout_core::models::ContentId;
use serde::{Deserialize, Serialize};

/// One row of a labelled count table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub count: i64,
}

impl CountEntry {
    pub fn new(label: impl Into<String>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Post count for the week starting on `week` (a Monday, `YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCount {
    pub week: String,
    pub count: i64,
}

/// Per-content activity counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTableRow {
    pub content_id: ContentId,
    pub title: String,
    pub thread_count: i64,
    pub post_count: i64,
    /// Lifetime report count, not windowed
    pub report_count: i64,
    pub save_count: i64,
}

/// Scalar headline numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kpis {
    pub total_contents: i64,
    pub total_threads: i64,
    pub total_posts: i64,
    pub total_reports_last_30_days: i64,
    pub total_saves: i64,
}

/// Production-company dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResult {
    pub total_contents: i64,
    pub total_threads: i64,
    pub total_posts: i64,
    #[serde(rename = "totalReportsLast30Days")]
    pub total_reports_last_30_days: i64,
    pub total_saves: i64,
    /// Ascending by type tag
    pub contents_by_type: Vec<CountEntry>,
    /// Descending by count
    pub contents_by_genre: Vec<CountEntry>,
    /// Oldest week first
    pub posts_per_week: Vec<WeeklyCount>,
    pub top_by_saves: Vec<ContentTableRow>,
    pub top_by_forum_activity: Vec<ContentTableRow>,
    /// Ascending by content id
    pub table: Vec<ContentTableRow>,
}
