//! HTTP-level integration tests for the `/customers` resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_customer, delete, get, post_json, put_json,
    register_and_login,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_customer_returns_201_with_id(pool: PgPool) {
    let token = register_and_login(&pool).await;

    let body = serde_json::json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "jane@x.com",
    });
    let response = post_json(build_test_app(pool), "/customers", body, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["message"], "Customer created successfully");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_then_get_roundtrips_fields(pool: PgPool) {
    let token = register_and_login(&pool).await;

    let body = serde_json::json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "phone": "555-0100",
        "company": "Analytical Engines Ltd",
    });
    let response = post_json(build_test_app(pool.clone()), "/customers", body, Some(&token)).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = get(
        build_test_app(pool),
        &format!("/customers/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Ada");
    assert_eq!(json["last_name"], "Lovelace");
    assert_eq!(json["email"], "ada@example.com");
    assert_eq!(json["phone"], "555-0100");
    assert_eq!(json["company"], "Analytical Engines Ltd");
    assert_eq!(json["address"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    let token = register_and_login(&pool).await;
    create_customer(&pool, &token, "jane@x.com").await;

    let body = serde_json::json!({
        "first_name": "Janet",
        "last_name": "Doe",
        "email": "jane@x.com",
    });
    let response = post_json(build_test_app(pool), "/customers", body, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Customer with this email already exists");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_fields_listed_in_error(pool: PgPool) {
    let token = register_and_login(&pool).await;

    let body = serde_json::json!({ "first_name": "OnlyFirst" });
    let response = post_json(build_test_app(pool), "/customers", body, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing required fields: last_name, email");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_email_returns_400(pool: PgPool) {
    let token = register_and_login(&pool).await;

    let body = serde_json::json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "not-an-email",
    });
    let response = post_json(build_test_app(pool), "/customers", body, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_partial_update_changes_only_given_field(pool: PgPool) {
    let token = register_and_login(&pool).await;
    let id = create_customer(&pool, &token, "jane@x.com").await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/customers/{id}"),
        serde_json::json!({ "phone": "555-0199" }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        build_test_app(pool),
        &format!("/customers/{id}"),
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["phone"], "555-0199");
    assert_eq!(json["first_name"], "Jane");
    assert_eq!(json["last_name"], "Doe");
    assert_eq!(json["email"], "jane@x.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_returns_404(pool: PgPool) {
    let token = register_and_login(&pool).await;

    let response = put_json(
        build_test_app(pool),
        "/customers/999999",
        serde_json::json!({ "phone": "555-0000" }),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_then_get_returns_404(pool: PgPool) {
    let token = register_and_login(&pool).await;
    let id = create_customer(&pool, &token, "jane@x.com").await;

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/customers/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Customer deleted successfully");

    let response = get(
        build_test_app(pool.clone()),
        &format!("/customers/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again also 404s.
    let response = delete(
        build_test_app(pool),
        &format!("/customers/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_search_filters_by_substring(pool: PgPool) {
    let token = register_and_login(&pool).await;
    create_customer(&pool, &token, "jane@x.com").await;

    let body = serde_json::json!({
        "first_name": "Bob",
        "last_name": "Smith",
        "email": "bob@y.com",
    });
    post_json(build_test_app(pool.clone()), "/customers", body, Some(&token)).await;

    // Case-insensitive match on last name.
    let response = get(
        build_test_app(pool.clone()),
        "/customers?search=smi",
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["customers"][0]["email"], "bob@y.com");

    // Match on email fragment.
    let response = get(
        build_test_app(pool.clone()),
        "/customers?search=jane%40",
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["customers"][0]["first_name"], "Jane");

    // No match.
    let response = get(
        build_test_app(pool),
        "/customers?search=zzz",
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 0);
    assert_eq!(json["pages"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleting_customer_cascades_to_dependents(pool: PgPool) {
    let token = register_and_login(&pool).await;
    let customer_id = create_customer(&pool, &token, "jane@x.com").await;

    let body = serde_json::json!({
        "customer_id": customer_id,
        "description": "Printer on fire",
        "status": "active",
    });
    let response = post_json(
        build_test_app(pool.clone()),
        "/support_tickets",
        body,
        Some(&token),
    )
    .await;
    let ticket_id = body_json(response).await["id"].as_i64().unwrap();

    delete(
        build_test_app(pool.clone()),
        &format!("/customers/{customer_id}"),
        Some(&token),
    )
    .await;

    let response = get(
        build_test_app(pool),
        &format!("/support_tickets/{ticket_id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
