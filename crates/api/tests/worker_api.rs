//! HTTP-level integration tests for the `/workers` resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete, get, post_json, put_json, register_and_login,
};
use sqlx::PgPool;

async fn create_worker(pool: &PgPool, token: &str, username: &str, email: &str) -> i64 {
    let body = serde_json::json!({
        "username": username,
        "email": email,
        "position": "support",
    });
    let response = post_json(build_test_app(pool.clone()), "/workers", body, Some(token)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_get_worker(pool: PgPool) {
    let token = register_and_login(&pool).await;
    let id = create_worker(&pool, &token, "alice", "alice@x.com").await;

    let response = get(
        build_test_app(pool),
        &format!("/workers/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], "alice@x.com");
    assert_eq!(json["position"], "support");
    // The password hash must never leave the server.
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_worker_missing_fields(pool: PgPool) {
    let token = register_and_login(&pool).await;

    let response = post_json(
        build_test_app(pool),
        "/workers",
        serde_json::json!({ "username": "bob" }),
        Some(&token),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing required fields: email, position");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_worker_duplicate_email(pool: PgPool) {
    let token = register_and_login(&pool).await;
    create_worker(&pool, &token, "alice", "alice@x.com").await;

    let body = serde_json::json!({
        "username": "alice2",
        "email": "alice@x.com",
        "position": "sales",
    });
    let response = post_json(build_test_app(pool), "/workers", body, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Worker with this email already exists");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_worker_duplicate_email(pool: PgPool) {
    let token = register_and_login(&pool).await;
    create_worker(&pool, &token, "alice", "alice@x.com").await;
    let id = create_worker(&pool, &token, "bob", "bob@x.com").await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/workers/{id}"),
        serde_json::json!({ "email": "alice@x.com" }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Re-submitting a worker's own email is not a conflict.
    let response = put_json(
        build_test_app(pool),
        &format!("/workers/{id}"),
        serde_json::json!({ "email": "bob@x.com" }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_worker_position(pool: PgPool) {
    let token = register_and_login(&pool).await;
    let id = create_worker(&pool, &token, "alice", "alice@x.com").await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/workers/{id}"),
        serde_json::json!({ "position": "manager" }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Worker updated successfully"
    );

    let response = get(
        build_test_app(pool),
        &format!("/workers/{id}"),
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["position"], "manager");
    assert_eq!(json["username"], "alice");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_workers_position_filter(pool: PgPool) {
    let token = register_and_login(&pool).await;
    create_worker(&pool, &token, "alice", "alice@x.com").await;
    create_worker(&pool, &token, "bob", "bob@x.com").await;

    let response = get(build_test_app(pool.clone()), "/workers?position=support", Some(&token)).await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
    assert!(json["workers"]
        .as_array()
        .unwrap()
        .iter()
        .all(|w| w["position"] == "support"));

    // register_and_login creates the "manager" test worker.
    let response = get(build_test_app(pool), "/workers?position=manager", Some(&token)).await;
    assert_eq!(body_json(response).await["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_worker(pool: PgPool) {
    let token = register_and_login(&pool).await;
    let id = create_worker(&pool, &token, "alice", "alice@x.com").await;

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/workers/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Worker deleted successfully"
    );

    let response = get(
        build_test_app(pool.clone()),
        &format!("/workers/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(
        build_test_app(pool),
        &format!("/workers/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
