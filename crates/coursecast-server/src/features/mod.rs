//! Feature slices
//!
//! Each feature is a vertical slice with its own commands, queries, and
//! routes:
//!
//! - **accounts**: registration, login, logout
//! - **courses**: catalogue, dashboard, course page
//! - **quizzes**: quiz lookup and answer scoring
//! - **videos**: range-aware video streaming
//!
//! Handlers pull what they need out of [`FeatureState`] through `FromRef`
//! (`State<SqlitePool>`, `State<VideoLibrary>`, the cookie [`Key`]).

pub mod accounts;
pub mod courses;
pub mod quizzes;
pub mod shared;
pub mod videos;

use axum::{extract::FromRef, Router};
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::session::{session_key, CookieSettings};
use videos::VideoLibrary;

/// Shared state for all feature routes
#[derive(Clone, FromRef)]
pub struct FeatureState {
    /// SQLite connection pool
    pub db: SqlitePool,
    /// Session cookie signing key
    pub key: Key,
    pub cookies: CookieSettings,
    pub videos: VideoLibrary,
}

impl FeatureState {
    /// Derive the signing key, cookie flags, and video library from configuration
    pub fn new(db: SqlitePool, config: &Config) -> Self {
        Self {
            db,
            key: session_key(&config.session.secret),
            cookies: CookieSettings {
                secure: config.session.secure_cookies,
            },
            videos: VideoLibrary::new(&config.videos.dir),
        }
    }
}

/// All feature routes with state applied
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .merge(courses::courses_routes())
        .merge(accounts::accounts_routes())
        .merge(quizzes::quizzes_routes())
        .merge(videos::videos_routes())
        .with_state(state)
}
