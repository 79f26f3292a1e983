//! Cross-cutting error types for the affiliate client.
//!
//! Domain-specific errors (`AuthError`, `ApiError`) live in their respective
//! crates. A unified error is deferred to `aff-cli` where all crate errors
//! converge into `anyhow`.

use thiserror::Error;

use crate::enums::AuthState;

/// Errors that can be raised by any `aff-*` crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Required input was missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A session state transition was attempted that is not allowed.
    #[error("Invalid session transition from {from} to {to}")]
    InvalidTransition { from: AuthState, to: AuthState },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
