//! Dashboard service tests against the in-memory store

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use reelscout_analytics::repository::{CallCounts, FailingCall};
use reelscout_analytics::{DashboardConfig, DashboardService, InMemoryStore};
use reelscout_core::models::{
    Content, ContentType, ForumPost, ForumPostReport, ForumThread, Genre,
};
use reelscout_core::ReelScoutError;
use std::sync::Arc;

const COMPANY: i64 = 10;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 15, 30, 0).unwrap()
}

fn content(id: i64, content_type: ContentType, genres: Vec<Genre>) -> Content {
    Content {
        id,
        title: format!("Title {id}"),
        content_type,
        genres,
        production_company_id: COMPANY,
    }
}

fn movie(id: i64) -> Content {
    content(id, ContentType::Movie, vec![])
}

fn thread(id: i64, content_id: i64) -> ForumThread {
    ForumThread {
        id,
        content_id,
        title: format!("Thread {id}"),
        created_at: now() - Duration::days(100),
        updated_at: now() - Duration::days(1),
    }
}

fn post(id: i64, thread_id: i64, created_at: DateTime<Utc>) -> ForumPost {
    ForumPost {
        id,
        thread_id,
        created_at: Some(created_at),
    }
}

fn report(id: i64, post_id: i64, created_at: DateTime<Utc>) -> ForumPostReport {
    ForumPostReport {
        id,
        post_id,
        reason: Some("harassment".to_string()),
        created_at: Some(created_at),
    }
}

fn service(store: Arc<InMemoryStore>) -> DashboardService {
    DashboardService::new(store.clone(), store.clone(), store)
}

#[tokio::test]
async fn test_empty_company_yields_zeroed_dashboard() {
    let store = Arc::new(InMemoryStore::new().with_content(content(
        1,
        ContentType::Movie,
        vec![Genre::Drama],
    )));

    let dashboard = service(store.clone())
        .build_dashboard_at(999, now())
        .await
        .unwrap();

    assert_eq!(dashboard.total_contents, 0);
    assert_eq!(dashboard.total_threads, 0);
    assert_eq!(dashboard.total_posts, 0);
    assert_eq!(dashboard.total_reports_last_30_days, 0);
    assert_eq!(dashboard.total_saves, 0);
    assert!(dashboard.contents_by_type.is_empty());
    assert!(dashboard.contents_by_genre.is_empty());
    assert!(dashboard.table.is_empty());
    assert!(dashboard.top_by_saves.is_empty());
    assert!(dashboard.top_by_forum_activity.is_empty());
    assert_eq!(dashboard.posts_per_week.len(), 12);
    assert!(dashboard.posts_per_week.iter().all(|w| w.count == 0));

    assert_eq!(
        store.call_counts(),
        CallCounts {
            contents: 1,
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn test_no_threads_short_circuits_forum_queries() {
    let store = Arc::new(
        InMemoryStore::new()
            .with_content(movie(1))
            .with_content(movie(2))
            .with_saves(2, 3),
    );

    let dashboard = service(store.clone())
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap();

    assert_eq!(dashboard.total_contents, 2);
    assert_eq!(dashboard.total_threads, 0);
    assert_eq!(dashboard.total_posts, 0);
    assert_eq!(dashboard.total_reports_last_30_days, 0);
    assert_eq!(dashboard.table.len(), 2);
    for row in &dashboard.table {
        assert_eq!(row.thread_count, 0);
        assert_eq!(row.post_count, 0);
        assert_eq!(row.report_count, 0);
    }

    let calls = store.call_counts();
    assert_eq!(calls.threads, 1);
    assert_eq!(calls.posts, 0);
    assert_eq!(calls.reports, 0);
}

#[tokio::test]
async fn test_no_posts_skips_report_query() {
    let store = Arc::new(
        InMemoryStore::new()
            .with_content(movie(1))
            .with_thread(thread(10, 1)),
    );

    let dashboard = service(store.clone())
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap();

    assert_eq!(dashboard.total_threads, 1);
    assert_eq!(dashboard.table[0].thread_count, 1);

    let calls = store.call_counts();
    assert_eq!(calls.posts, 1);
    assert_eq!(calls.reports, 0);
}

#[tokio::test]
async fn test_weekly_series_is_complete_and_monday_aligned() {
    let store = Arc::new(
        InMemoryStore::new()
            .with_content(movie(1))
            .with_thread(thread(10, 1))
            .with_post(post(100, 10, now() - Duration::weeks(1)))
            .with_post(post(101, 10, now() - Duration::weeks(2)))
            .with_post(post(102, 10, now() - Duration::weeks(5)))
            .with_post(post(103, 10, now() - Duration::weeks(30))),
    );

    let dashboard = service(store)
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap();

    assert_eq!(dashboard.total_posts, 4);
    assert_eq!(dashboard.posts_per_week.len(), 12);
    assert_eq!(
        dashboard
            .posts_per_week
            .iter()
            .map(|w| w.count)
            .sum::<i64>(),
        3
    );

    let weeks: Vec<NaiveDate> = dashboard
        .posts_per_week
        .iter()
        .map(|w| NaiveDate::parse_from_str(&w.week, "%Y-%m-%d").unwrap())
        .collect();
    assert!(weeks.iter().all(|d| d.weekday() == Weekday::Mon));
    assert!(weeks.windows(2).all(|p| p[1] - p[0] == Duration::days(7)));
    assert_eq!(dashboard.posts_per_week[0].week, "2026-07-20");
    assert_eq!(dashboard.posts_per_week[11].week, "2026-10-05");
}

#[tokio::test]
async fn test_genre_fan_out_and_type_breakdown() {
    let store = Arc::new(
        InMemoryStore::new()
            .with_content(content(
                1,
                ContentType::Movie,
                vec![Genre::Drama, Genre::Action],
            ))
            .with_content(content(2, ContentType::TvShow, vec![Genre::Drama]))
            .with_content(content(3, ContentType::Movie, vec![])),
    );

    let dashboard = service(store)
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap();

    let genres: Vec<(&str, i64)> = dashboard
        .contents_by_genre
        .iter()
        .map(|e| (e.label.as_str(), e.count))
        .collect();
    assert_eq!(genres, vec![("DRAMA", 2), ("ACTION", 1)]);

    let types: Vec<(&str, i64)> = dashboard
        .contents_by_type
        .iter()
        .map(|e| (e.label.as_str(), e.count))
        .collect();
    assert_eq!(types, vec![("MOVIE", 2), ("TV_SHOW", 1)]);
}

#[tokio::test]
async fn test_top_by_saves_is_bounded_and_drawn_from_table() {
    let mut store = InMemoryStore::new();
    for id in 1..=7 {
        store = store.with_content(movie(id)).with_saves(id, id * 3);
    }
    let store = Arc::new(store);

    let dashboard = service(store.clone())
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap();

    assert_eq!(dashboard.top_by_saves.len(), 5);
    let saves: Vec<i64> = dashboard.top_by_saves.iter().map(|r| r.save_count).collect();
    assert_eq!(saves, vec![21, 18, 15, 12, 9]);
    for row in &dashboard.top_by_saves {
        assert!(dashboard.table.contains(row));
    }
    assert_eq!(dashboard.top_by_forum_activity.len(), 5);
    assert_eq!(dashboard.total_saves, (1..=7).map(|id| id * 3).sum::<i64>());

    // one lookup per content item, shared by the total and the table
    assert_eq!(store.call_counts().watchlist_counts, 7);
}

#[tokio::test]
async fn test_report_window_applies_only_to_kpi() {
    let store = Arc::new(
        InMemoryStore::new()
            .with_content(movie(1))
            .with_thread(thread(10, 1))
            .with_post(post(100, 10, now() - Duration::days(70)))
            .with_report(report(1000, 100, now() - Duration::days(10)))
            .with_report(report(1001, 100, now() - Duration::days(60))),
    );

    let dashboard = service(store)
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap();

    assert_eq!(dashboard.total_reports_last_30_days, 1);
    assert_eq!(dashboard.table[0].report_count, 2);
}

#[tokio::test]
async fn test_table_has_every_content_in_id_order() {
    let store = Arc::new(
        InMemoryStore::new()
            .with_content(movie(5))
            .with_content(movie(2))
            .with_content(movie(9))
            .with_thread(thread(10, 9))
            .with_post(post(100, 10, now() - Duration::days(3)))
            .with_post(post(101, 10, now() - Duration::days(4))),
    );

    let dashboard = service(store)
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap();

    let ids: Vec<i64> = dashboard.table.iter().map(|r| r.content_id).collect();
    assert_eq!(ids, vec![2, 5, 9]);
    assert_eq!(dashboard.table[2].post_count, 2);
    assert_eq!(dashboard.top_by_forum_activity[0].content_id, 9);
}

#[tokio::test]
async fn test_upstream_failure_fails_whole_dashboard() {
    let store = Arc::new(
        InMemoryStore::new()
            .with_content(movie(1))
            .with_thread(thread(10, 1))
            .with_post(post(100, 10, now()))
            .failing_on(FailingCall::Reports),
    );

    let err = service(store)
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap_err();

    assert!(matches!(err, ReelScoutError::DatabaseError(_)));
}

#[tokio::test]
async fn test_custom_config_changes_series_and_rankings() {
    let mut store = InMemoryStore::new();
    for id in 1..=4 {
        store = store.with_content(movie(id)).with_saves(id, id);
    }

    let config = DashboardConfig {
        weeks: 4,
        top_n: 2,
        report_window_days: 7,
    };
    let dashboard = service(Arc::new(store))
        .with_config(config)
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap();

    assert_eq!(dashboard.posts_per_week.len(), 4);
    assert_eq!(dashboard.top_by_saves.len(), 2);
    assert_eq!(dashboard.top_by_saves[0].content_id, 4);
}

#[tokio::test]
async fn test_out_of_range_config_is_an_error_not_a_panic() {
    let store = Arc::new(InMemoryStore::new().with_content(movie(1)));

    let config = DashboardConfig {
        report_window_days: i64::MAX / 2,
        ..Default::default()
    };
    let err = service(store.clone())
        .with_config(config)
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap_err();

    assert!(matches!(err, ReelScoutError::ConfigurationError { .. }));
    assert_eq!(store.call_counts(), CallCounts::default());
}

#[tokio::test]
async fn test_dashboard_json_uses_camel_case() {
    let store = Arc::new(InMemoryStore::new().with_content(movie(1)).with_saves(1, 2));

    let dashboard = service(store)
        .build_dashboard_at(COMPANY, now())
        .await
        .unwrap();
    let json = serde_json::to_value(&dashboard).unwrap();

    assert_eq!(json["totalContents"], 1);
    assert_eq!(json["totalReportsLast30Days"], 0);
    assert_eq!(json["totalSaves"], 2);
    assert_eq!(json["postsPerWeek"].as_array().unwrap().len(), 12);
    assert_eq!(json["table"][0]["contentId"], 1);
    assert_eq!(json["table"][0]["saveCount"], 2);
    assert_eq!(json["contentsByType"][0]["label"], "MOVIE");
}
