//! Support ticket entity model and DTOs.

use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full support ticket row from the `support_tickets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SupportTicket {
    pub id: DbId,
    pub customer_id: DbId,
    pub description: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// Request body for creating a support ticket.
#[derive(Debug, Deserialize)]
pub struct CreateSupportTicket {
    pub customer_id: Option<DbId>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Request body for a partial support ticket update.
#[derive(Debug, Deserialize)]
pub struct UpdateSupportTicket {
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for `GET /support_tickets`.
#[derive(Debug, Deserialize)]
pub struct ListSupportTicketsParams {
    pub customer_id: Option<DbId>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Ticket counts per status, for the dashboard summary endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TicketStatusCounts {
    pub active: i64,
    pub deactivated: i64,
    pub in_process: i64,
}
