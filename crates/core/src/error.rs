use crate::types::DbId;

/// Domain error taxonomy shared across all resources.
///
/// The HTTP layer maps each variant onto a status code; the `id` on
/// [`CoreError::NotFound`] is kept for structured logging but is not
/// surfaced in the client-facing message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
