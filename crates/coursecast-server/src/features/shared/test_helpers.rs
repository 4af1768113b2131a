//! Test fixtures backed by an in-memory SQLite database
//!
//! ```rust,ignore
//! let pool = test_pool().await;
//! let user_id = insert_user(&pool, "Ada", "ada@example.com").await;
//! let course_id = insert_course(&pool, "Intro", "intro.mp4").await;
//! insert_quiz(&pool, course_id, "Pick one", &["a", "b"], 1).await;
//! ```

use crate::db::MIGRATOR;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Fresh migrated database
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("enable foreign keys");
    MIGRATOR.run(&pool).await.expect("migrations");
    pool
}

/// Insert a user with a placeholder hash; returns its id
pub async fn insert_user(pool: &SqlitePool, name: &str, email: &str) -> i64 {
    sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?1, ?2, 'not-a-real-hash')")
        .bind(name)
        .bind(email)
        .execute(pool)
        .await
        .expect("insert user")
        .last_insert_rowid()
}

pub async fn insert_course(pool: &SqlitePool, title: &str, video_filename: &str) -> i64 {
    sqlx::query("INSERT INTO courses (title, description, video_filename) VALUES (?1, ?2, ?3)")
        .bind(title)
        .bind(format!("About {}", title))
        .bind(video_filename)
        .execute(pool)
        .await
        .expect("insert course")
        .last_insert_rowid()
}

pub async fn insert_quiz(
    pool: &SqlitePool,
    course_id: i64,
    question: &str,
    options: &[&str],
    answer_index: i64,
) -> i64 {
    let options_json = serde_json::to_string(options).expect("options json");
    sqlx::query(
        "INSERT INTO quizzes (course_id, question, options_json, answer_index) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(course_id)
    .bind(question)
    .bind(options_json)
    .bind(answer_index)
    .execute(pool)
    .await
    .expect("insert quiz")
    .last_insert_rowid()
}
