//! Demo data for local development
//!
//! Safe to run on every start: existing rows are left untouched.

use sqlx::SqlitePool;

use crate::features::accounts::password::{hash_password, PasswordError};

pub const DEMO_STUDENT_NAME: &str = "Sample Student";
pub const DEMO_STUDENT_EMAIL: &str = "student@example.com";
pub const DEMO_STUDENT_PASSWORD: &str = "Password123";

pub const DEMO_COURSE_TITLE: &str = "Intro to Flask";
pub const DEMO_VIDEO_FILENAME: &str = "sample.mp4";

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to hash demo password: {0}")]
    Password(#[from] PasswordError),

    #[error("Failed to encode quiz options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// What a seed run inserted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub student_created: bool,
    pub course_created: bool,
}

#[tracing::instrument(skip(pool))]
pub async fn seed_demo(pool: &SqlitePool) -> Result<SeedReport, SeedError> {
    let report = SeedReport {
        student_created: seed_student(pool).await?,
        course_created: seed_course(pool).await?,
    };

    tracing::info!(
        student_created = report.student_created,
        course_created = report.course_created,
        "Demo data seeded"
    );
    Ok(report)
}

async fn seed_student(pool: &SqlitePool) -> Result<bool, SeedError> {
    let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?1")
        .bind(DEMO_STUDENT_EMAIL)
        .fetch_optional(pool)
        .await?;
    if exists.is_some() {
        return Ok(false);
    }

    let password_hash = hash_password(DEMO_STUDENT_PASSWORD.to_string()).await?;
    let result = sqlx::query(
        r#"
        INSERT INTO users (name, email, password_hash)
        VALUES (?1, ?2, ?3)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(DEMO_STUDENT_NAME)
    .bind(DEMO_STUDENT_EMAIL)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

async fn seed_course(pool: &SqlitePool) -> Result<bool, SeedError> {
    let mut tx = pool.begin().await?;

    let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM courses WHERE title = ?1")
        .bind(DEMO_COURSE_TITLE)
        .fetch_optional(&mut *tx)
        .await?;
    if exists.is_some() {
        return Ok(false);
    }

    let course_id = sqlx::query(
        "INSERT INTO courses (title, description, video_filename) VALUES (?1, ?2, ?3)",
    )
    .bind(DEMO_COURSE_TITLE)
    .bind("A short intro lesson about Flask basics.")
    .bind(DEMO_VIDEO_FILENAME)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    let options = serde_json::to_string(&[
        "Flask is a microframework",
        "Flask is a database",
        "Flask is a frontend library",
    ])?;
    sqlx::query(
        "INSERT INTO quizzes (course_id, question, options_json, answer_index) VALUES (?1, ?2, ?3, 0)",
    )
    .bind(course_id)
    .bind("What is Flask?")
    .bind(options)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(true)
}
