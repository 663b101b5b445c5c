//! Handlers for the `/interactions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::pagination::{clamp_page, clamp_per_page, page_count};
use crm_core::types::DbId;
use crm_core::validate::RequiredFields;
use crm_db::models::interaction::{
    CreateInteraction, Interaction, ListInteractionsParams, UpdateInteraction,
};
use crm_db::repositories::{CustomerRepo, InteractionRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthWorker;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Response body for `GET /interactions`.
#[derive(Debug, Serialize)]
pub struct InteractionListResponse {
    pub interactions: Vec<Interaction>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

/// GET /interactions
///
/// List interactions with an optional customer filter and pagination.
pub async fn list_interactions(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Query(params): Query<ListInteractionsParams>,
) -> AppResult<impl IntoResponse> {
    let (interactions, total) = InteractionRepo::list(&state.pool, &params).await?;

    Ok(Json(InteractionListResponse {
        interactions,
        total,
        pages: page_count(total, clamp_per_page(params.per_page)),
        current_page: clamp_page(params.page),
    }))
}

/// GET /interactions/{id}
pub async fn get_interaction(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let interaction = InteractionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }))?;

    Ok(Json(interaction))
}

/// POST /interactions
///
/// Record an interaction with an existing customer.
pub async fn create_interaction(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Json(input): Json<CreateInteraction>,
) -> AppResult<impl IntoResponse> {
    RequiredFields::new()
        .present("customer_id", &input.customer_id)
        .text("notes", input.notes.as_deref())
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

    let interaction = InteractionRepo::create(&state.pool, &input).await?;

    tracing::info!(interaction_id = interaction.id, customer_id, "Interaction created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: interaction.id,
            message: "Interaction created successfully",
        }),
    ))
}

/// PUT /interactions/{id}
///
/// Partial update; only `notes` is mutable.
pub async fn update_interaction(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInteraction>,
) -> AppResult<impl IntoResponse> {
    InteractionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }))?;

    Ok(Json(MessageResponse {
        message: "Interaction updated successfully",
    }))
}

/// DELETE /interactions/{id}
pub async fn delete_interaction(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = InteractionRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }));
    }

    Ok(Json(MessageResponse {
        message: "Interaction deleted successfully",
    }))
}
