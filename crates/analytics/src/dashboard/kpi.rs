//! Headline counters

use chrono::{DateTime, Duration, Utc};

use super::fetch::DashboardSnapshot;
use super::types::Kpis;

/// Compute the scalar totals
///
/// Reports count toward the windowed total when created at or after
/// `now - report_window`. Reports without a timestamp are not counted.
pub fn compute_kpis(
    snapshot: &DashboardSnapshot,
    now: DateTime<Utc>,
    report_window: Duration,
) -> Kpis {
    let cutoff = now - report_window;

    let recent_reports = snapshot
        .reports
        .iter()
        .filter(|r| r.created_at.is_some_and(|at| at >= cutoff))
        .count();

    let total_saves = snapshot
        .contents
        .iter()
        .map(|c| snapshot.saves_for(c.id))
        .sum();

    Kpis {
        total_contents: snapshot.contents.len() as i64,
        total_threads: snapshot.threads.len() as i64,
        total_posts: snapshot.posts.len() as i64,
        total_reports_last_30_days: recent_reports as i64,
        total_saves,
    }
}
