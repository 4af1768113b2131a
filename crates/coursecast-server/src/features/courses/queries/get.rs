use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::Course;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCourseQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetCourseError {
    #[error("Course not found")]
    NotFound,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, query: GetCourseQuery) -> Result<Course, GetCourseError> {
    sqlx::query_as::<_, Course>(
        r#"
        SELECT id, title, description, video_filename
        FROM courses
        WHERE id = ?1
        "#,
    )
    .bind(query.id)
    .fetch_optional(&pool)
    .await?
    .ok_or(GetCourseError::NotFound)
}
