//! Analytics entity model and DTOs.

use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full analytics row from the `analytics` table. `data` is an opaque
/// text blob owned by the reporting frontend.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Analytics {
    pub id: DbId,
    pub data: String,
    pub created_at: Timestamp,
}

/// Request body for creating an analytics entry.
#[derive(Debug, Deserialize)]
pub struct CreateAnalytics {
    pub data: Option<String>,
}

/// Request body for updating an analytics entry.
#[derive(Debug, Deserialize)]
pub struct UpdateAnalytics {
    pub data: Option<String>,
}

/// Query parameters for `GET /analytics`.
#[derive(Debug, Deserialize)]
pub struct ListAnalyticsParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
