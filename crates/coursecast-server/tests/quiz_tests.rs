//! Integration tests for course pages and `POST /api/submit_quiz`

use axum::http::{header, StatusCode};
use serde_json::json;

mod common;
use common::{body_json, body_string, TestApp};

async fn progress_rows(app: &TestApp, course_id: i64) -> Vec<i64> {
    sqlx::query_as::<_, (i64,)>("SELECT progress_percent FROM progress WHERE course_id = ?1")
        .bind(course_id)
        .fetch_all(&app.pool)
        .await
        .unwrap()
        .into_iter()
        .map(|(percent,)| percent)
        .collect()
}

#[tokio::test]
async fn test_correct_then_incorrect_updates_single_row() {
    let app = TestApp::new().await;
    let cookie = app.register_and_login("Ada", "ada@example.com", "Password123").await;
    let course_id = app.insert_course("Intro", "sample.mp4").await;
    app.insert_quiz(course_id, &["right", "wrong"], 0).await;

    let first = app
        .post_json("/api/submit_quiz", json!({ "course_id": course_id, "selected_index": 0 }), Some(&cookie))
        .await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await, json!({ "correct": true, "progress": 100 }));
    assert_eq!(progress_rows(&app, course_id).await, vec![100]);

    let second = app
        .post_json("/api/submit_quiz", json!({ "course_id": course_id, "selected_index": 1 }), Some(&cookie))
        .await;
    assert_eq!(body_json(second).await, json!({ "correct": false, "progress": 50 }));
    assert_eq!(progress_rows(&app, course_id).await, vec![50]);
}

#[tokio::test]
async fn test_submit_requires_login() {
    let app = TestApp::new().await;
    let course_id = app.insert_course("Intro", "sample.mp4").await;
    app.insert_quiz(course_id, &["a"], 0).await;

    let response = app
        .post_json("/api/submit_quiz", json!({ "course_id": course_id, "selected_index": 0 }), None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert!(progress_rows(&app, course_id).await.is_empty());
}

#[tokio::test]
async fn test_submit_without_quiz_is_not_found() {
    let app = TestApp::new().await;
    let cookie = app.register_and_login("Ada", "ada@example.com", "Password123").await;
    let course_id = app.insert_course("No quiz", "sample.mp4").await;

    for target in [course_id, 9999] {
        let response = app
            .post_json("/api/submit_quiz", json!({ "course_id": target, "selected_index": 0 }), Some(&cookie))
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_dashboard_reflects_progress() {
    let app = TestApp::new().await;
    let cookie = app.register_and_login("Ada", "ada@example.com", "Password123").await;
    let course_id = app.insert_course("Intro", "sample.mp4").await;
    app.insert_course("Untouched", "other.mp4").await;
    app.insert_quiz(course_id, &["right", "wrong"], 0).await;

    app.post_json("/api/submit_quiz", json!({ "course_id": course_id, "selected_index": 1 }), Some(&cookie))
        .await;

    let html = body_string(app.get_with("/dashboard", header::COOKIE, &cookie).await).await;
    assert!(html.contains("50%"));
    assert!(html.contains("Not started"));
}

#[tokio::test]
async fn test_course_page() {
    let app = TestApp::new().await;
    let cookie = app.register_and_login("Ada", "ada@example.com", "Password123").await;
    let course_id = app.insert_course("Intro", "sample.mp4").await;
    app.insert_quiz(course_id, &["right", "wrong"], 0).await;

    let response = app.get_with(&format!("/course/{}", course_id), header::COOKIE, &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"src="/video/sample.mp4""#));
    assert!(html.contains("Question?"));

    let missing = app.get_with("/course/9999", header::COOKIE, &cookie).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
