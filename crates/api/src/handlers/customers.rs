//! Handlers for the `/customers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::pagination::{clamp_page, clamp_per_page, page_count};
use crm_core::types::DbId;
use crm_core::validate::{validate_email, RequiredFields};
use crm_db::models::customer::{CreateCustomer, Customer, ListCustomersParams, UpdateCustomer};
use crm_db::repositories::CustomerRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthWorker;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Response body for `GET /customers`.
#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub customers: Vec<Customer>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

/// GET /customers
///
/// List customers with optional substring search and pagination.
pub async fn list_customers(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Query(params): Query<ListCustomersParams>,
) -> AppResult<impl IntoResponse> {
    let (customers, total) = CustomerRepo::list(&state.pool, &params).await?;

    Ok(Json(CustomerListResponse {
        customers,
        total,
        pages: page_count(total, clamp_per_page(params.per_page)),
        current_page: clamp_page(params.page),
    }))
}

/// GET /customers/{id}
pub async fn get_customer(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;

    Ok(Json(customer))
}

/// POST /customers
///
/// Create a customer. Requires first_name, last_name, and a well-formed,
/// unused email.
pub async fn create_customer(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<impl IntoResponse> {
    RequiredFields::new()
        .text("first_name", input.first_name.as_deref())
        .text("last_name", input.last_name.as_deref())
        .text("email", input.email.as_deref())
        .check()?;

    let email = input.email.as_deref().unwrap_or_default();
    validate_email(email)?;

    if CustomerRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Customer with this email already exists".into(),
        )));
    }

    let customer = CustomerRepo::create(&state.pool, &input).await?;

    tracing::info!(customer_id = customer.id, "Customer created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: customer.id,
            message: "Customer created successfully",
        }),
    ))
}

/// PUT /customers/{id}
///
/// Partial update; absent fields keep their stored values.
pub async fn update_customer(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<impl IntoResponse> {
    if let Some(email) = input.email.as_deref() {
        validate_email(email)?;
    }

    CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;

    Ok(Json(MessageResponse {
        message: "Customer updated successfully",
    }))
}

/// DELETE /customers/{id}
///
/// Deletes the customer; dependent leads, interactions, and tickets go
/// with it (FK cascade).
pub async fn delete_customer(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CustomerRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }));
    }

    tracing::info!(customer_id = id, "Customer deleted");

    Ok(Json(MessageResponse {
        message: "Customer deleted successfully",
    }))
}
