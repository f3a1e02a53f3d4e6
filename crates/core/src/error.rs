//! Domain error taxonomy.
//!
//! Every recoverable failure in the service maps to one of these variants.
//! The API layer translates them into HTTP status codes and JSON bodies;
//! none of them is fatal to the process.

use crate::types::DbId;

/// Domain-level error shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field is missing or an input fails a constraint check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness constraint would be violated (duplicate username/email,
    /// duplicate enrollment, duplicate participation).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad credentials or a missing/invalid identity token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
