//! Customer entity model and DTOs.

use crm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full customer row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
}

/// Request body for creating a customer.
///
/// Required fields are `Option` so the handler can report every missing
/// field in one validation error instead of failing on deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
}

/// Request body for a partial customer update. Absent fields keep their
/// stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
}

/// Query parameters for `GET /customers`.
#[derive(Debug, Deserialize)]
pub struct ListCustomersParams {
    /// Case-insensitive substring match over first_name, last_name, email.
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
