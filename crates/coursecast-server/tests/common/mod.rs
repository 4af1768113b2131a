//! Shared fixtures for HTTP-level tests
//!
//! Each [`TestApp`] owns a fresh in-memory database and a temporary video
//! directory, and drives the real router through `oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tempfile::TempDir;
use tower::ServiceExt;

use coursecast_server::{api, config::Config, db, features::FeatureState};

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub videos: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .expect("foreign keys");
        db::run_migrations(&pool).await.expect("migrations");

        let videos = tempfile::tempdir().expect("video dir");

        let mut config = Config::default();
        config.videos.dir = videos.path().to_path_buf();
        config.session.secret = "integration-test-secret-integration-test-secret".to_string();

        let router = api::create_router(FeatureState::new(pool.clone(), &config), &config);

        Self {
            router,
            pool,
            videos,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("router is infallible")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn get_with(&self, uri: &str, name: header::HeaderName, value: &str) -> Response {
        self.send(
            Request::builder()
                .uri(uri)
                .header(name, value)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, json: serde_json::Value, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(json.to_string())).unwrap()).await
    }

    /// Write a video fixture into the library directory
    pub fn write_video(&self, name: &str, bytes: &[u8]) {
        let path = self.videos.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, bytes).unwrap();
    }

    /// Register through the form and log in; returns the `Cookie` header value
    pub async fn register_and_login(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .post_form(
                "/register",
                &format!("name={}&email={}&password={}", name, urlencode(email), password),
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        self.login(email, password).await.expect("login succeeds")
    }

    /// `Some(cookie)` on a successful login
    pub async fn login(&self, email: &str, password: &str) -> Option<String> {
        let response = self
            .post_form("/login", &format!("email={}&password={}", urlencode(email), password))
            .await;
        if response.status() != StatusCode::SEE_OTHER {
            return None;
        }
        session_cookie(&response)
    }

    pub async fn insert_course(&self, title: &str, video_filename: &str) -> i64 {
        sqlx::query("INSERT INTO courses (title, description, video_filename) VALUES (?1, '', ?2)")
            .bind(title)
            .bind(video_filename)
            .execute(&self.pool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    pub async fn insert_quiz(&self, course_id: i64, options: &[&str], answer_index: i64) {
        sqlx::query(
            "INSERT INTO quizzes (course_id, question, options_json, answer_index) VALUES (?1, 'Question?', ?2, ?3)",
        )
        .bind(course_id)
        .bind(serde_json::to_string(options).unwrap())
        .bind(answer_index)
        .execute(&self.pool)
        .await
        .unwrap();
    }
}

/// `name=value` pair of the session cookie set by `response`
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("coursecast_session="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_string(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn urlencode(value: &str) -> String {
    value.replace('@', "%40").replace('+', "%2B")
}

/// Deterministic non-repeating-looking payload
pub fn sample_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 % 256) as u8).collect()
}
