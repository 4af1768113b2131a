use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::{Quiz, QuizRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetQuizForCourseQuery {
    pub course_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetQuizForCourseError {
    #[error("Quiz options are corrupt: {0}")]
    CorruptOptions(#[from] serde_json::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The course's quiz, or `None` when it has none
#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: GetQuizForCourseQuery,
) -> Result<Option<Quiz>, GetQuizForCourseError> {
    let record = sqlx::query_as::<_, QuizRecord>(
        r#"
        SELECT id, course_id, question, options_json, answer_index
        FROM quizzes
        WHERE course_id = ?1
        "#,
    )
    .bind(query.course_id)
    .fetch_optional(&pool)
    .await?;

    record.map(Quiz::try_from).transpose().map_err(Into::into)
}
