//! Handlers for the `/sales_leads` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::pagination::{clamp_page, clamp_per_page, page_count};
use crm_core::types::DbId;
use crm_core::validate::RequiredFields;
use crm_db::models::sales_lead::{
    CreateSalesLead, ListSalesLeadsParams, SalesLead, UpdateSalesLead,
};
use crm_db::repositories::{CustomerRepo, SalesLeadRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthWorker;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Response body for `GET /sales_leads`.
#[derive(Debug, Serialize)]
pub struct SalesLeadListResponse {
    pub sales_leads: Vec<SalesLead>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

/// GET /sales_leads
///
/// List sales leads with optional customer/status filters and pagination.
pub async fn list_sales_leads(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Query(params): Query<ListSalesLeadsParams>,
) -> AppResult<impl IntoResponse> {
    let (sales_leads, total) = SalesLeadRepo::list(&state.pool, &params).await?;

    Ok(Json(SalesLeadListResponse {
        sales_leads,
        total,
        pages: page_count(total, clamp_per_page(params.per_page)),
        current_page: clamp_page(params.page),
    }))
}

/// GET /sales_leads/{id}
pub async fn get_sales_lead(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let sales_lead = SalesLeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sales lead",
            id,
        }))?;

    Ok(Json(sales_lead))
}

/// POST /sales_leads
///
/// Create a sales lead for an existing customer.
pub async fn create_sales_lead(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Json(input): Json<CreateSalesLead>,
) -> AppResult<impl IntoResponse> {
    RequiredFields::new()
        .present("customer_id", &input.customer_id)
        .text("status", input.status.as_deref())
        .check()?;

    let customer_id = input.customer_id.unwrap_or_default();
    if CustomerRepo::find_by_id(&state.pool, customer_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id: customer_id,
        }));
    }

    let sales_lead = SalesLeadRepo::create(&state.pool, &input).await?;

    tracing::info!(sales_lead_id = sales_lead.id, customer_id, "Sales lead created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: sales_lead.id,
            message: "Sales lead created successfully",
        }),
    ))
}

/// PUT /sales_leads/{id}
///
/// Partial update; only `status` is mutable.
pub async fn update_sales_lead(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSalesLead>,
) -> AppResult<impl IntoResponse> {
    SalesLeadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sales lead",
            id,
        }))?;

    Ok(Json(MessageResponse {
        message: "Sales lead updated successfully",
    }))
}

/// DELETE /sales_leads/{id}
pub async fn delete_sales_lead(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SalesLeadRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Sales lead",
            id,
        }));
    }

    Ok(Json(MessageResponse {
        message: "Sales lead deleted successfully",
    }))
}
