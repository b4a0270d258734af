//! PostgreSQL implementations of the dashboard storage ports

use async_trait::async_trait;
use reelscout_core::models::{
    Content, ContentId, ContentType, ForumPost, ForumPostReport, ForumThread, Genre, PostId,
    ProductionCompanyId, ThreadId,
};
use reelscout_core::{ReelScoutError, Result};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use tracing::warn;

use super::{ContentRepository, ForumRepository, WatchlistRepository};

#[derive(Debug, FromRow)]
struct ContentRow {
    id: i64,
    title: String,
    content_type: String,
    production_company_id: i64,
    genres: Option<Vec<String>>,
}

impl TryFrom<ContentRow> for Content {
    type Error = ReelScoutError;

    fn try_from(row: ContentRow) -> Result<Self> {
        let content_type = ContentType::parse(&row.content_type).ok_or_else(|| {
            ReelScoutError::DatabaseError(format!(
                "unknown content_type '{}' on content {}",
                row.content_type, row.id
            ))
        })?;

        // ARRAY_AGG over zero genre rows yields NULL
        let genres = row
            .genres
            .unwrap_or_default()
            .iter()
            .filter_map(|tag| {
                let genre = Genre::parse(tag);
                if genre.is_none() {
                    warn!(content_id = row.id, genre = %tag, "Skipping unknown genre tag");
                }
                genre
            })
            .collect();

        Ok(Content {
            id: row.id,
            title: row.title,
            content_type,
            genres,
            production_company_id: row.production_company_id,
        })
    }
}

pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn find_by_owner(&self, company_id: ProductionCompanyId) -> Result<Vec<Content>> {
        let rows = sqlx::query_as::<_, ContentRow>(
            r#"
            SELECT
                c.id,
                c.title,
                c.content_type,
                c.production_company_id,
                ARRAY_AGG(g.genre::TEXT ORDER BY g.position) FILTER (WHERE g.genre IS NOT NULL) AS genres
            FROM content c
            LEFT JOIN content_genres g ON g.content_id = c.id
            WHERE c.production_company_id = $1
            GROUP BY c.id, c.title, c.content_type, c.production_company_id
            ORDER BY c.id
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Content::try_from).collect()
    }
}

pub struct PostgresForumRepository {
    pool: PgPool,
}

impl PostgresForumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForumRepository for PostgresForumRepository {
    async fn find_threads_by_content_in(
        &self,
        content_ids: &[ContentId],
    ) -> Result<Vec<ForumThread>> {
        let threads = sqlx::query_as::<_, ForumThread>(
            r#"
            SELECT id, content_id, title, created_at, updated_at
            FROM forum_threads
            WHERE content_id = ANY($1)
            "#,
        )
        .bind(content_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(threads)
    }

    async fn find_posts_by_thread_in(&self, thread_ids: &[ThreadId]) -> Result<Vec<ForumPost>> {
        let posts = sqlx::query_as::<_, ForumPost>(
            r#"
            SELECT id, thread_id, created_at
            FROM forum_posts
            WHERE thread_id = ANY($1)
            "#,
        )
        .bind(thread_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find_reports_by_post_in(&self, post_ids: &[PostId]) -> Result<Vec<ForumPostReport>> {
        let reports = sqlx::query_as::<_, ForumPostReport>(
            r#"
            SELECT id, post_id, reason, created_at
            FROM forum_post_reports
            WHERE post_id = ANY($1)
            "#,
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }
}

pub struct PostgresWatchlistRepository {
    pool: PgPool,
}

impl PostgresWatchlistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WatchlistRepository for PostgresWatchlistRepository {
    async fn count_containing(&self, content_id: ContentId) -> Result<i64> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT watchlist_id)
            FROM watchlist_contents
            WHERE content_id = $1
            "#,
        )
        .bind(content_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.unwrap_or(0))
    }

    async fn count_containing_many(
        &self,
        content_ids: &[ContentId],
    ) -> Result<HashMap<ContentId, i64>> {
        let rows: Vec<(i64, i64)> = sqlx::query_as(
            r#"
            SELECT content_id, COUNT(DISTINCT watchlist_id) AS saves
            FROM watchlist_contents
            WHERE content_id = ANY($1)
            GROUP BY content_id
            "#,
        )
        .bind(content_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut counts: HashMap<ContentId, i64> =
            content_ids.iter().map(|&id| (id, 0)).collect();
        counts.extend(rows);

        Ok(counts)
    }
}
