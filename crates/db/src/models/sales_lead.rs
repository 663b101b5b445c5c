//! Sales lead entity model and DTOs.

use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full sales lead row from the `sales_leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SalesLead {
    pub id: DbId,
    pub customer_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
}

/// Request body for creating a sales lead.
#[derive(Debug, Deserialize)]
pub struct CreateSalesLead {
    pub customer_id: Option<DbId>,
    pub status: Option<String>,
}

/// Request body for a partial sales lead update.
#[derive(Debug, Deserialize)]
pub struct UpdateSalesLead {
    pub status: Option<String>,
}

/// Query parameters for `GET /sales_leads`.
#[derive(Debug, Deserialize)]
pub struct ListSalesLeadsParams {
    pub customer_id: Option<DbId>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
