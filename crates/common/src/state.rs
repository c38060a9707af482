//! Common state machine error types
//!
//! Shared across all domain crates that implement state machines.

use crate::error::Error;

/// Errors that can occur during state transitions
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot transition from {from} to {to} via {event}")]
    InvalidTransition {
        from: String,
        to: String,
        event: String,
    },

    #[error("Guard condition failed: {0}")]
    GuardFailed(String),
}

impl StateError {
    /// Rephrase a state machine failure as a validation error for `entity`
    /// (e.g. "content", "room").
    pub fn into_validation(self, entity: &str) -> Error {
        match self {
            StateError::InvalidTransition { from, event, .. } => Error::Validation(format!(
                "Invalid {} transition: cannot apply '{}' event from '{}' state",
                entity, event, from
            )),
            StateError::GuardFailed(msg) => Error::Validation(msg),
        }
    }
}
