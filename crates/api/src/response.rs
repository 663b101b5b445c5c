//! Shared response envelope types for API handlers.
//!
//! Mutation endpoints answer with small fixed envelopes instead of
//! ad-hoc `serde_json::json!` literals so the shapes stay consistent
//! across resources.

use crm_core::types::DbId;
use serde::Serialize;

/// `{ "id": ..., "message": ... }` body returned by create endpoints (201).
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub message: &'static str,
}

/// `{ "message": ... }` body returned by update, delete, and logout.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
