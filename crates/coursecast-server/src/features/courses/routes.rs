//! Course page routes
//!
//! - `GET /` - Catalogue, public
//! - `GET /dashboard` - Courses with the caller's progress, login required
//! - `GET /course/:id` - Lesson video and quiz, login required

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use maud::Markup;
use sqlx::SqlitePool;

use super::queries::{
    dashboard, get, list, DashboardError, DashboardQuery, GetCourseError, GetCourseQuery,
    ListCoursesError, ListCoursesQuery,
};
use crate::error::AppError;
use crate::features::quizzes::queries::{get_for_course, GetQuizForCourseQuery};
use crate::features::FeatureState;
use crate::session::{PageUser, Viewer};
use crate::views;

pub fn courses_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(index))
        .route("/dashboard", get(dashboard_page))
        .route("/course/:id", get(course_page))
}

#[tracing::instrument(skip_all)]
async fn index(State(pool): State<SqlitePool>, Viewer(viewer): Viewer) -> Result<Markup, AppError> {
    let courses = list::handle(pool, ListCoursesQuery).await?;
    Ok(views::courses::index_page(viewer.as_ref(), &courses))
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn dashboard_page(
    State(pool): State<SqlitePool>,
    PageUser(user): PageUser,
) -> Result<Markup, AppError> {
    let entries = dashboard::handle(pool, DashboardQuery { user_id: user.id }).await?;
    Ok(views::courses::dashboard_page(&user, &entries))
}

#[tracing::instrument(skip(pool, user), fields(user_id = user.id))]
async fn course_page(
    State(pool): State<SqlitePool>,
    PageUser(user): PageUser,
    Path(id): Path<i64>,
) -> Result<Markup, AppError> {
    let course = get::handle(pool.clone(), GetCourseQuery { id }).await?;
    let quiz = get_for_course::handle(pool, GetQuizForCourseQuery { course_id: course.id }).await?;

    tracing::debug!(course_id = course.id, has_quiz = quiz.is_some(), "Rendering course page");
    Ok(views::courses::course_page(&user, &course, quiz.as_ref()))
}

impl From<ListCoursesError> for AppError {
    fn from(err: ListCoursesError) -> Self {
        match err {
            ListCoursesError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<GetCourseError> for AppError {
    fn from(err: GetCourseError) -> Self {
        match err {
            GetCourseError::NotFound => AppError::NotFound(err.to_string()),
            GetCourseError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Database(e) => AppError::Database(e),
        }
    }
}
