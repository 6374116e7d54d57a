//! HTTP-level integration tests for the `/api/log`, `/api/tasks` and
//! `/api/flush` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::{Method, StatusCode};
use chrono::{DateTime, Utc};
use common::{body_json, build_test_app, get, patch, post_json, post_raw, send_empty};
use serde_json::json;
use sqlx::PgPool;

/// POST an entry and return its parsed body, asserting 201.
async fn create(pool: &PgPool, entry_type: &str, content: &str) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/log",
        json!({"userId": 1, "type": entry_type, "content": content}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Append entry
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_append_task_returns_201_with_entry(pool: PgPool) {
    let before = Utc::now();
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/log",
        json!({"userId": 1, "type": "Task", "content": "buy milk"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get("location")
        .expect("Missing Location header")
        .to_str()
        .unwrap()
        .to_string();

    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/api/log/{id}"));
    assert_eq!(json["userId"], 1);
    assert_eq!(json["type"], "Task");
    assert_eq!(json["content"], "buy milk");
    assert!(json["completedAt"].is_null());

    let ts: DateTime<Utc> = json["timestamp"].as_str().unwrap().parse().unwrap();
    assert!((ts - before).num_seconds().abs() < 60);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_append_discards_client_id_and_timestamp(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/log",
        json!({
            "id": 424242,
            "timestamp": "1999-12-31T23:59:59Z",
            "completedAt": "2000-01-01T00:00:00Z",
            "userId": 5,
            "type": "Idea",
            "content": "time travel"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_ne!(json["id"], 424242);
    assert_ne!(json["timestamp"], "1999-12-31T23:59:59Z");
    assert!(json["completedAt"].is_null());
    assert_eq!(json["userId"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_repeated_appends_create_distinct_entries(pool: PgPool) {
    let a = create(&pool, "Note", "same").await;
    let b = create(&pool, "Note", "same").await;
    assert_ne!(a["id"], b["id"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_appended_entry_is_retrievable(pool: PgPool) {
    let created = create(&pool, "Wait", "reply from landlord").await;
    let id = created["id"].as_i64().unwrap();

    let response = get(build_test_app(pool), &format!("/api/log/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, created);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_content_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/log",
        json!({"userId": 1, "type": "Note", "content": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Content is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_whitespace_content_returns_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/log",
        json!({"userId": 1, "type": "Note", "content": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_positive_user_id_returns_400(pool: PgPool) {
    for user_id in [0, -1] {
        let app = build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/log",
            json!({"userId": user_id, "type": "Task", "content": "x"}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "userId {user_id}");
        let json = body_json(response).await;
        assert_eq!(json["error"], "UserId is required");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_content_and_user_id_return_400(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/log", json!({"type": "Idea"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_type_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/log",
        json!({"userId": 1, "type": "Someday", "content": "x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "UNPROCESSABLE_ENTITY");

    let tasks = body_json(get(build_test_app(pool), "/api/tasks").await).await;
    assert!(tasks.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_body_returns_422(pool: PgPool) {
    for body in [r#"{"userId": 1, "type": "Task", "content": "x""#, "not json", ""] {
        let response = post_raw(build_test_app(pool.clone()), "/api/log", body).await;
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body {body:?}"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "UNPROCESSABLE_ENTITY");
        assert!(json["error"].is_string());
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM log_entries")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrong_field_type_returns_422(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/log",
        json!({"userId": "one", "type": "Task", "content": "x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rejected_append_writes_nothing(pool: PgPool) {
    post_json(
        build_test_app(pool.clone()),
        "/api/log",
        json!({"userId": 1, "type": "Task", "content": " "}),
    )
    .await;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM log_entries")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Open tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_new_task_appears_in_open_tasks(pool: PgPool) {
    let created = create(&pool, "Task", "buy milk").await;

    let response = get(build_test_app(pool), "/api/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tasks = json.as_array().expect("response should be an array");
    assert!(tasks.iter().any(|t| t["id"] == created["id"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_open_tasks_only_returns_uncompleted_tasks(pool: PgPool) {
    create(&pool, "Idea", "idea").await;
    create(&pool, "Note", "note").await;
    create(&pool, "Wait", "wait").await;
    let open = create(&pool, "Task", "open").await;
    let done = create(&pool, "Task", "done").await;

    let done_id = done["id"].as_i64().unwrap();
    let response = patch(
        build_test_app(pool.clone()),
        &format!("/api/log/{done_id}/complete"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(build_test_app(pool), "/api/tasks").await).await;
    let tasks = json.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], open["id"]);
    assert!(tasks
        .iter()
        .all(|t| t["type"] == "Task" && t["completedAt"].is_null()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_open_tasks_newest_first(pool: PgPool) {
    let t1 = create(&pool, "Task", "t1").await;
    let t2 = create(&pool, "Task", "t2").await;
    let t3 = create(&pool, "Task", "t3").await;

    let json = body_json(get(build_test_app(pool), "/api/tasks").await).await;
    let ids: Vec<&serde_json::Value> = json.as_array().unwrap().iter().map(|t| &t["id"]).collect();
    assert_eq!(ids, vec![&t3["id"], &t2["id"], &t1["id"]]);
}

// ---------------------------------------------------------------------------
// Completion and lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_complete_keeps_first_completion_time(pool: PgPool) {
    let task = create(&pool, "Task", "once").await;
    let uri = format!("/api/log/{}/complete", task["id"]);

    let first = body_json(patch(build_test_app(pool.clone()), &uri).await).await;
    assert!(first["completedAt"].is_string());

    let second = body_json(patch(build_test_app(pool), &uri).await).await;
    assert_eq!(second["completedAt"], first["completedAt"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_complete_unknown_entry_returns_404(pool: PgPool) {
    let response = patch(build_test_app(pool), "/api/log/999999/complete").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_entry_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/log/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Flush
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_flush_returns_not_implemented_message(pool: PgPool) {
    create(&pool, "Task", "still here").await;

    let response = send_empty(build_test_app(pool.clone()), Method::POST, "/api/flush").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({"message": "Flush not implemented yet"}));

    let tasks = body_json(get(build_test_app(pool), "/api/tasks").await).await;
    assert_eq!(tasks.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_flush_on_empty_store(pool: PgPool) {
    let response = send_empty(build_test_app(pool), Method::POST, "/api/flush").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Flush not implemented yet");
}
