use chrono::{DateTime, Utc};
use reelscout_core::models::ProductionCompanyId;
use reelscout_core::Result;
use std::sync::Arc;
use tracing::info;

use super::categories::{contents_by_genre, contents_by_type};
use super::fetch::fetch_snapshot;
use super::kpi::compute_kpis;
use super::ranking::{build_table, top_by_forum_activity, top_by_saves};
use super::types::DashboardResult;
use super::weekly::posts_per_week;
use crate::config::DashboardConfig;
use crate::repository::{ContentRepository, ForumRepository, WatchlistRepository};

/// Production-company dashboard service
///
/// Holds no state between calls; every request fetches and aggregates afresh.
pub struct DashboardService {
    contents: Arc<dyn ContentRepository>,
    forums: Arc<dyn ForumRepository>,
    watchlists: Arc<dyn WatchlistRepository>,
    config: DashboardConfig,
}

impl DashboardService {
    pub fn new(
        contents: Arc<dyn ContentRepository>,
        forums: Arc<dyn ForumRepository>,
        watchlists: Arc<dyn WatchlistRepository>,
    ) -> Self {
        Self {
            contents,
            forums,
            watchlists,
            config: DashboardConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the dashboard as of now
    pub async fn build_dashboard(&self, company_id: ProductionCompanyId) -> Result<DashboardResult> {
        self.build_dashboard_at(company_id, Utc::now()).await
    }

    /// Build the dashboard as of `now`
    ///
    /// Fails as a whole if any lookup fails; no partial dashboard is returned.
    /// An out-of-range config is rejected before any query runs.
    pub async fn build_dashboard_at(
        &self,
        company_id: ProductionCompanyId,
        now: DateTime<Utc>,
    ) -> Result<DashboardResult> {
        self.config.validate()?;
        info!(company_id, "Building production company dashboard");

        let snapshot = fetch_snapshot(
            self.contents.as_ref(),
            self.forums.as_ref(),
            self.watchlists.as_ref(),
            company_id,
        )
        .await?;

        let kpis = compute_kpis(&snapshot, now, self.config.report_window());
        let table = build_table(&snapshot);
        let top_by_saves = top_by_saves(&table, self.config.top_n);
        let top_by_forum_activity = top_by_forum_activity(&table, self.config.top_n);

        let dashboard = DashboardResult {
            total_contents: kpis.total_contents,
            total_threads: kpis.total_threads,
            total_posts: kpis.total_posts,
            total_reports_last_30_days: kpis.total_reports_last_30_days,
            total_saves: kpis.total_saves,
            contents_by_type: contents_by_type(&snapshot.contents),
            contents_by_genre: contents_by_genre(&snapshot.contents),
            posts_per_week: posts_per_week(&snapshot.posts, now.date_naive(), self.config.weeks),
            top_by_saves,
            top_by_forum_activity,
            table,
        };

        info!(
            company_id,
            contents = dashboard.total_contents,
            threads = dashboard.total_threads,
            posts = dashboard.total_posts,
            saves = dashboard.total_saves,
            "Dashboard built"
        );

        Ok(dashboard)
    }
}
