use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::Course;

/// All courses in catalogue order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCoursesQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListCoursesError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, _query: ListCoursesQuery) -> Result<Vec<Course>, ListCoursesError> {
    let courses = sqlx::query_as::<_, Course>(
        r#"
        SELECT id, title, description, video_filename
        FROM courses
        ORDER BY id ASC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    tracing::debug!(count = courses.len(), "Listed courses");
    Ok(courses)
}
