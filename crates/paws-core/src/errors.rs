//! Cross-cutting error types for Paws.
//!
//! Reducers return these instead of silently dropping bad input. Crate-specific
//! errors (`ConfigError`, `ApiError`) live in their own crates and wrap this one
//! where they meet.

use thiserror::Error;

/// Errors that can be raised by any Paws crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No record matched the requested id.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Input failed validation (blank fields, negative quantities, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A list is full: either the configured record limit or the id space.
    #[error("Capacity exceeded: {entity_type} limit {limit}")]
    CapacityExceeded { entity_type: String, limit: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn invalid_transition(
        entity_type: &str,
        id: impl ToString,
        from: impl ToString,
        to: impl ToString,
    ) -> Self {
        Self::InvalidTransition {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn capacity_exceeded(entity_type: &str, limit: impl ToString) -> Self {
        Self::CapacityExceeded {
            entity_type: entity_type.to_string(),
            limit: limit.to_string(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
