//! Dashboard query: every course with the caller's progress

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub user_id: i64,
}

/// One dashboard row; `progress_percent` is `None` until the quiz is taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DashboardEntry {
    pub course_id: i64,
    pub title: String,
    pub description: String,
    pub progress_percent: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, query: DashboardQuery) -> Result<Vec<DashboardEntry>, DashboardError> {
    let entries = sqlx::query_as::<_, DashboardEntry>(
        r#"
        SELECT c.id AS course_id, c.title, c.description, p.progress_percent
        FROM courses c
        LEFT JOIN progress p ON p.course_id = c.id AND p.user_id = ?1
        ORDER BY c.id ASC
        "#,
    )
    .bind(query.user_id)
    .fetch_all(&pool)
    .await?;

    Ok(entries)
}
