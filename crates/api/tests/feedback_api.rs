//! HTTP-level integration tests for `/api/feedback`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_raw};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_feedback_returns_201_with_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/feedback",
        serde_json::json!({"name": "Jane Doe", "feedback": "Great service", "rating": 5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Feedback submitted successfully.");
    assert!(json["data"]["id"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_required_fields_returns_400(pool: PgPool) {
    for body in [
        serde_json::json!({"feedback": "No name"}),
        serde_json::json!({"name": "No text"}),
        serde_json::json!({"name": "   ", "feedback": "Blank name"}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/feedback", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "name and feedback are required.");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn null_required_field_counts_as_missing(pool: PgPool) {
    for body in [
        serde_json::json!({"name": null, "feedback": "x"}),
        serde_json::json!({"name": "Jane", "feedback": null}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/feedback", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "name and feedback are required.");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn null_optionals_are_accepted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/feedback",
        serde_json::json!({
            "name": "Jane",
            "mobile": null,
            "email": null,
            "project_name": null,
            "feedback": "Great service",
            "rating": null
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn store_accepts_2000_chars_and_rejects_more(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/feedback",
        serde_json::json!({"name": "Long", "feedback": "x".repeat(2000)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/feedback",
        serde_json::json!({"name": "Longer", "feedback": "x".repeat(2001)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rating_out_of_range_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/feedback",
        serde_json::json!({"name": "A", "feedback": "B", "rating": 7}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_json_returns_400_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/feedback", b"{not json".to_vec()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_feedback_is_newest_first_and_trimmed(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/feedback",
        serde_json::json!({"name": "Older", "feedback": "first"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/feedback",
        serde_json::json!({
            "name": "  Newer  ",
            "email": "  ",
            "project_name": "Thesis",
            "feedback": "second",
            "rating": 4
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/feedback").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let list = json.as_array().expect("GET returns a bare array");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Newer");
    assert_eq!(list[0]["email"], serde_json::Value::Null);
    assert_eq!(list[0]["project_name"], "Thesis");
    assert_eq!(list[0]["rating"], 4);
    assert!(list[0]["created_at"].is_string());
    assert_eq!(list[1]["name"], "Older");
}
