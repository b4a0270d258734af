//! Weekly post series with Monday-start weeks

use chrono::{Datelike, Duration, NaiveDate};
use reelscout_core::models::ForumPost;
use std::collections::HashMap;

use super::types::WeeklyCount;

/// Monday of the week containing `date`
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// First bucket of a `weeks`-long series ending before the current week
pub fn series_start(today: NaiveDate, weeks: usize) -> NaiveDate {
    monday_of(today - Duration::weeks(weeks as i64))
}

/// Bucket posts by the Monday of their creation week
///
/// Emits exactly `weeks` entries starting at [`series_start`], oldest first,
/// zero-filled. Posts without a timestamp or older than the series start are
/// dropped, as are posts from the current week.
pub fn posts_per_week(posts: &[ForumPost], today: NaiveDate, weeks: usize) -> Vec<WeeklyCount> {
    let start = series_start(today, weeks);

    let mut buckets: HashMap<NaiveDate, i64> = HashMap::new();
    for created_at in posts.iter().filter_map(|p| p.created_at) {
        let week = monday_of(created_at.date_naive());
        if week >= start {
            *buckets.entry(week).or_insert(0) += 1;
        }
    }

    (0..weeks)
        .map(|i| {
            let week = start + Duration::weeks(i as i64);
            WeeklyCount {
                week: week.format("%Y-%m-%d").to_string(),
                count: buckets.get(&week).copied().unwrap_or(0),
            }
        })
        .collect()
}
