//! Handlers for the `/analytics` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::pagination::{clamp_page, clamp_per_page, page_count};
use crm_core::types::DbId;
use crm_core::validate::RequiredFields;
use crm_db::models::analytics::{
    Analytics, CreateAnalytics, ListAnalyticsParams, UpdateAnalytics,
};
use crm_db::repositories::AnalyticsRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthWorker;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Response body for `GET /analytics`.
#[derive(Debug, Serialize)]
pub struct AnalyticsListResponse {
    pub analytics: Vec<Analytics>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

/// GET /analytics
pub async fn list_analytics(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Query(params): Query<ListAnalyticsParams>,
) -> AppResult<impl IntoResponse> {
    let (analytics, total) = AnalyticsRepo::list(&state.pool, &params).await?;

    Ok(Json(AnalyticsListResponse {
        analytics,
        total,
        pages: page_count(total, clamp_per_page(params.per_page)),
        current_page: clamp_page(params.page),
    }))
}

/// GET /analytics/{id}
pub async fn get_analytic(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = AnalyticsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Analytics entry",
            id,
        }))?;

    Ok(Json(entry))
}

/// POST /analytics
pub async fn create_analytic(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Json(input): Json<CreateAnalytics>,
) -> AppResult<impl IntoResponse> {
    RequiredFields::new()
        .text("data", input.data.as_deref())
        .check()?;

    let entry = AnalyticsRepo::create(&state.pool, input.data.as_deref().unwrap_or_default())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: entry.id,
            message: "Analytics entry created",
        }),
    ))
}

/// PUT /analytics/{id}
pub async fn update_analytic(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnalytics>,
) -> AppResult<impl IntoResponse> {
    RequiredFields::new()
        .text("data", input.data.as_deref())
        .check()?;

    AnalyticsRepo::update(&state.pool, id, input.data.as_deref().unwrap_or_default())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Analytics entry",
            id,
        }))?;

    Ok(Json(MessageResponse {
        message: "Analytics entry updated",
    }))
}

/// DELETE /analytics/{id}
pub async fn delete_analytic(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AnalyticsRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Analytics entry",
            id,
        }));
    }

    Ok(Json(MessageResponse {
        message: "Analytics entry deleted",
    }))
}
