//! Quiz API routes
//!
//! - `POST /api/submit_quiz` - Score an answer and record progress

use axum::{extract::State, routing::post, Json, Router};
use sqlx::SqlitePool;

use super::commands::{
    submit_answer, SubmitAnswerCommand, SubmitAnswerError, SubmitAnswerRequest, SubmitAnswerResponse,
};
use super::queries::GetQuizForCourseError;
use crate::error::AppError;
use crate::features::FeatureState;
use crate::session::ApiUser;

pub fn quizzes_routes() -> Router<FeatureState> {
    Router::new().route("/api/submit_quiz", post(submit_quiz))
}

/// Returns `{"correct": bool, "progress": int}`
#[tracing::instrument(skip(pool, user, request), fields(user_id = user.id, course_id = request.course_id))]
async fn submit_quiz(
    State(pool): State<SqlitePool>,
    ApiUser(user): ApiUser,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, AppError> {
    let command = SubmitAnswerCommand {
        user_id: user.id,
        course_id: request.course_id,
        selected_index: request.selected_index,
    };

    let response = submit_answer::handle(pool, command).await?;
    Ok(Json(response))
}

impl From<SubmitAnswerError> for AppError {
    fn from(err: SubmitAnswerError) -> Self {
        match err {
            SubmitAnswerError::QuizNotFound => AppError::NotFound(err.to_string()),
            SubmitAnswerError::Quiz(e) => e.into(),
            SubmitAnswerError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<GetQuizForCourseError> for AppError {
    fn from(err: GetQuizForCourseError) -> Self {
        match err {
            GetQuizForCourseError::CorruptOptions(e) => AppError::Internal(e.to_string()),
            GetQuizForCourseError::Database(e) => AppError::Database(e),
        }
    }
}
