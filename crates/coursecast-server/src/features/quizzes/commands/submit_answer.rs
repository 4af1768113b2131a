//! Submit quiz answer command
//!
//! Scores the answer and records progress for the (user, course) pair.
//! The progress write is one `INSERT ... ON CONFLICT DO UPDATE` statement, so
//! concurrent submissions can never produce a second row.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::quizzes::queries::{get_for_course, GetQuizForCourseError, GetQuizForCourseQuery};
use crate::models::Progress;

pub const CORRECT_PERCENT: i64 = 100;

pub const INCORRECT_PERCENT: i64 = 50;

/// JSON body of `POST /api/submit_quiz`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub course_id: i64,
    pub selected_index: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerCommand {
    pub user_id: i64,
    pub course_id: i64,
    pub selected_index: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub progress: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitAnswerError {
    #[error("Quiz not found")]
    QuizNotFound,

    #[error(transparent)]
    Quiz(#[from] GetQuizForCourseError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    command: SubmitAnswerCommand,
) -> Result<SubmitAnswerResponse, SubmitAnswerError> {
    let quiz = get_for_course::handle(
        pool.clone(),
        GetQuizForCourseQuery {
            course_id: command.course_id,
        },
    )
    .await?
    .ok_or(SubmitAnswerError::QuizNotFound)?;

    let correct = command.selected_index == quiz.answer_index;
    let percent = if correct { CORRECT_PERCENT } else { INCORRECT_PERCENT };

    let progress = sqlx::query_as::<_, Progress>(
        r#"
        INSERT INTO progress (user_id, course_id, progress_percent, updated_at)
        VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)
        ON CONFLICT (user_id, course_id) DO UPDATE
        SET progress_percent = excluded.progress_percent,
            updated_at = CURRENT_TIMESTAMP
        RETURNING id, user_id, course_id, progress_percent, updated_at
        "#,
    )
    .bind(command.user_id)
    .bind(command.course_id)
    .bind(percent)
    .fetch_one(&pool)
    .await?;

    tracing::info!(
        progress_id = progress.id,
        correct,
        progress = progress.progress_percent,
        "Quiz answer recorded"
    );

    Ok(SubmitAnswerResponse {
        correct,
        progress: progress.progress_percent,
    })
}
