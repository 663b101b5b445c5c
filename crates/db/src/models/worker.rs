//! Worker entity model and DTOs.

use crm_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full worker row from the `workers` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`WorkerResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Worker {
    pub id: DbId,
    pub username: String,
    pub email: Option<String>,
    pub position: Option<String>,
    /// PHC-formatted Argon2id hash. `None` for workers without a login.
    pub password_hash: Option<String>,
    pub created_at: Timestamp,
}

/// Safe worker representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct WorkerResponse {
    pub id: DbId,
    pub username: String,
    pub email: Option<String>,
    pub position: Option<String>,
    pub created_at: Timestamp,
}

impl From<Worker> for WorkerResponse {
    fn from(worker: Worker) -> Self {
        Self {
            id: worker.id,
            username: worker.username,
            email: worker.email,
            position: worker.position,
            created_at: worker.created_at,
        }
    }
}

/// Validated input for inserting a worker row.
///
/// Built by the handlers (register sets `password_hash`; the CRUD
/// create endpoint leaves it `None`), not deserialized from a request.
#[derive(Debug)]
pub struct NewWorker {
    pub username: String,
    pub email: Option<String>,
    pub position: Option<String>,
    pub password_hash: Option<String>,
}

/// Request body for a partial worker update. Absent fields keep their
/// stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateWorker {
    pub username: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
}

/// Query parameters for `GET /workers`.
#[derive(Debug, Deserialize)]
pub struct ListWorkersParams {
    /// Exact match on position.
    pub position: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
