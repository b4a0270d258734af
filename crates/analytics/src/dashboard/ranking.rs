//! Per-content counters and top-N rankings

use reelscout_core::models::{ContentId, PostId, ThreadId};
use std::collections::HashMap;

use super::fetch::DashboardSnapshot;
use super::types::ContentTableRow;

#[derive(Default)]
struct Activity {
    threads: i64,
    posts: i64,
    reports: i64,
}

/// One row per owned content item, ascending by content id
///
/// Posts are attributed by walking post → thread → content and reports by
/// report → post → thread → content. Entries whose parent is not in the
/// snapshot are ignored.
pub fn build_table(snapshot: &DashboardSnapshot) -> Vec<ContentTableRow> {
    let thread_content: HashMap<ThreadId, ContentId> = snapshot
        .threads
        .iter()
        .map(|t| (t.id, t.content_id))
        .collect();

    let post_content: HashMap<PostId, ContentId> = snapshot
        .posts
        .iter()
        .filter_map(|p| thread_content.get(&p.thread_id).map(|&c| (p.id, c)))
        .collect();

    let mut activity: HashMap<ContentId, Activity> = HashMap::new();

    for thread in &snapshot.threads {
        activity.entry(thread.content_id).or_default().threads += 1;
    }
    for &content_id in snapshot
        .posts
        .iter()
        .filter_map(|p| thread_content.get(&p.thread_id))
    {
        activity.entry(content_id).or_default().posts += 1;
    }
    for &content_id in snapshot
        .reports
        .iter()
        .filter_map(|r| post_content.get(&r.post_id))
    {
        activity.entry(content_id).or_default().reports += 1;
    }

    let mut table: Vec<ContentTableRow> = snapshot
        .contents
        .iter()
        .map(|content| {
            let counts = activity.remove(&content.id).unwrap_or_default();
            ContentTableRow {
                content_id: content.id,
                title: content.title.clone(),
                thread_count: counts.threads,
                post_count: counts.posts,
                report_count: counts.reports,
                save_count: snapshot.saves_for(content.id),
            }
        })
        .collect();

    table.sort_by_key(|row| row.content_id);
    table
}

/// First `n` rows by a descending key; equal keys keep table order
pub fn top_by<F>(table: &[ContentTableRow], n: usize, key: F) -> Vec<ContentTableRow>
where
    F: Fn(&ContentTableRow) -> i64,
{
    let mut ranked: Vec<&ContentTableRow> = table.iter().collect();
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked.into_iter().take(n).cloned().collect()
}

pub fn top_by_saves(table: &[ContentTableRow], n: usize) -> Vec<ContentTableRow> {
    top_by(table, n, |row| row.save_count)
}

pub fn top_by_forum_activity(table: &[ContentTableRow], n: usize) -> Vec<ContentTableRow> {
    top_by(table, n, |row| row.post_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reelscout_core::models::{
        Content, ContentType, ForumPost, ForumPostReport, ForumThread,
    };

    fn content(id: i64) -> Content {
        Content {
            id,
            title: format!("Title {id}"),
            content_type: ContentType::Movie,
            genres: vec![],
            production_company_id: 1,
        }
    }

    fn thread(id: i64, content_id: i64) -> ForumThread {
        ForumThread {
            id,
            content_id,
            title: format!("Thread {id}"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn post(id: i64, thread_id: i64) -> ForumPost {
        ForumPost {
            id,
            thread_id,
            created_at: Some(Utc::now()),
        }
    }

    fn report(id: i64, post_id: i64) -> ForumPostReport {
        ForumPostReport {
            id,
            post_id,
            reason: Some("spoilers".to_string()),
            created_at: None,
        }
    }

    fn row(content_id: i64, post_count: i64, save_count: i64) -> ContentTableRow {
        ContentTableRow {
            content_id,
            title: String::new(),
            thread_count: 0,
            post_count,
            report_count: 0,
            save_count,
        }
    }

    #[test]
    fn test_table_walks_the_forum_chain() {
        let snapshot = DashboardSnapshot {
            contents: vec![content(3), content(1), content(2)],
            threads: vec![thread(10, 1), thread(11, 1), thread(12, 3)],
            posts: vec![post(100, 10), post(101, 11), post(102, 12), post(103, 10)],
            reports: vec![report(1000, 100), report(1001, 102), report(1002, 102)],
            saves: HashMap::from([(1, 5), (2, 1)]),
        };

        let table = build_table(&snapshot);
        let ids: Vec<i64> = table.iter().map(|r| r.content_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(table[0].thread_count, 2);
        assert_eq!(table[0].post_count, 3);
        assert_eq!(table[0].report_count, 1);
        assert_eq!(table[0].save_count, 5);

        assert_eq!(table[1].thread_count, 0);
        assert_eq!(table[1].post_count, 0);
        assert_eq!(table[1].report_count, 0);
        assert_eq!(table[1].save_count, 1);

        assert_eq!(table[2].thread_count, 1);
        assert_eq!(table[2].post_count, 1);
        assert_eq!(table[2].report_count, 2);
        assert_eq!(table[2].save_count, 0);
    }

    #[test]
    fn test_orphans_are_ignored() {
        let snapshot = DashboardSnapshot {
            contents: vec![content(1)],
            threads: vec![thread(10, 1)],
            posts: vec![post(100, 10), post(101, 99)],
            reports: vec![report(1000, 101), report(1001, 555)],
            saves: HashMap::new(),
        };

        let table = build_table(&snapshot);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].post_count, 1);
        assert_eq!(table[0].report_count, 0);
    }

    #[test]
    fn test_top_by_saves_takes_highest_first() {
        let table: Vec<ContentTableRow> = (1..=7).map(|id| row(id, 0, id * 10)).collect();

        let top = top_by_saves(&table, 5);
        let saves: Vec<i64> = top.iter().map(|r| r.save_count).collect();
        assert_eq!(saves, vec![70, 60, 50, 40, 30]);
    }

    #[test]
    fn test_top_by_forum_activity_is_stable_on_ties() {
        let table = vec![row(1, 3, 0), row(2, 5, 0), row(3, 3, 0), row(4, 1, 0)];

        let top = top_by_forum_activity(&table, 5);
        let ids: Vec<i64> = top.iter().map(|r| r.content_id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_top_on_short_table() {
        let table = vec![row(1, 0, 0)];
        assert_eq!(top_by_saves(&table, 5).len(), 1);
        assert!(top_by_saves(&[], 5).is_empty());
    }
}
