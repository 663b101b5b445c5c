//! Handlers for the `/support_tickets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use crm_core::error::CoreError;
use crm_core::pagination::{clamp_page, clamp_per_page, page_count};
use crm_core::types::DbId;
use crm_core::validate::RequiredFields;
use crm_db::models::support_ticket::{
    CreateSupportTicket, ListSupportTicketsParams, SupportTicket, UpdateSupportTicket,
};
use crm_db::repositories::{CustomerRepo, SupportTicketRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthWorker;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Response body for `GET /support_tickets`.
#[derive(Debug, Serialize)]
pub struct SupportTicketListResponse {
    pub support_tickets: Vec<SupportTicket>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

/// GET /support_tickets
///
/// List support tickets with optional customer/status filters and pagination.
pub async fn list_support_tickets(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Query(params): Query<ListSupportTicketsParams>,
) -> AppResult<impl IntoResponse> {
    let (support_tickets, total) = SupportTicketRepo::list(&state.pool, &params).await?;

    Ok(Json(SupportTicketListResponse {
        support_tickets,
        total,
        pages: page_count(total, clamp_per_page(params.per_page)),
        current_page: clamp_page(params.page),
    }))
}

/// GET /support_tickets/status
///
/// Ticket counts per well-known status, for the dashboard.
pub async fn get_ticket_status(
    _auth: AuthWorker,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let counts = SupportTicketRepo::status_counts(&state.pool).await?;

    Ok(Json(counts))
}

/// GET /support_tickets/{id}
pub async fn get_support_ticket(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ticket = SupportTicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Support ticket",
            id,
        }))?;

    Ok(Json(ticket))
}

/// POST /support_tickets
///
/// Open a ticket for an existing customer.
pub async fn create_support_ticket(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Json(input): Json<CreateSupportTicket>,
) -> AppResult<impl IntoResponse> {
    RequiredFields::new()
        .present("customer_id", &input.customer_id)
        .text("description", input.description.as_deref())
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

    let ticket = SupportTicketRepo::create(&state.pool, &input).await?;

    tracing::info!(ticket_id = ticket.id, customer_id, "Support ticket created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: ticket.id,
            message: "Support ticket created successfully",
        }),
    ))
}

/// PUT /support_tickets/{id}
///
/// Partial update of description and/or status.
pub async fn update_support_ticket(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSupportTicket>,
) -> AppResult<impl IntoResponse> {
    SupportTicketRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Support ticket",
            id,
        }))?;

    Ok(Json(MessageResponse {
        message: "Support ticket updated successfully",
    }))
}

/// DELETE /support_tickets/{id}
pub async fn delete_support_ticket(
    _auth: AuthWorker,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SupportTicketRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Support ticket",
            id,
        }));
    }

    Ok(Json(MessageResponse {
        message: "Support ticket deleted successfully",
    }))
}
