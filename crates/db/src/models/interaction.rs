//! Interaction entity model and DTOs.

use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full interaction row from the `interactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interaction {
    pub id: DbId,
    pub customer_id: DbId,
    pub notes: String,
    pub created_at: Timestamp,
}

/// Request body for creating an interaction.
#[derive(Debug, Deserialize)]
pub struct CreateInteraction {
    pub customer_id: Option<DbId>,
    pub notes: Option<String>,
}

/// Request body for a partial interaction update.
#[derive(Debug, Deserialize)]
pub struct UpdateInteraction {
    pub notes: Option<String>,
}

/// Query parameters for `GET /interactions`.
#[derive(Debug, Deserialize)]
pub struct ListInteractionsParams {
    pub customer_id: Option<DbId>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
