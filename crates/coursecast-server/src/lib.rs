//! CourseCast server library
//!
//! A small e-learning site: accounts, a course catalogue, one lesson video
//! and one quiz per course, and per-course progress.
//!
//! # Architecture
//!
//! Features are vertical slices under [`features`], each with its own
//! commands (writes), queries (reads), and routes. Queries and commands are
//! plain `handle(pool, request)` functions with a `thiserror` error enum;
//! routes convert those errors into [`AppError`].
//!
//! The video slice is the interesting one: `GET /video/*filename` serves the
//! whole file or a single byte range, streaming from disk in chunks.
//!
//! # Example
//!
//! ```no_run
//! use coursecast_server::{api, config::Config, db, features::FeatureState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     db::run_migrations(&pool).await?;
//!     let app = api::create_router(FeatureState::new(pool, &config), &config);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod seed;
pub mod session;
pub mod views;

pub use error::{AppError, AppResult};
