use aff_core::{CoreError, View};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Required input missing; raised before any request is sent.
    #[error("{0}")]
    Validation(String),

    /// The remote API rejected the credentials, token, or request.
    #[error("{0}")]
    Authentication(String),

    /// No interpretable response (transport failure, timeout, garbage body).
    #[error("connection error: {0}")]
    Connection(String),

    /// A protected view was entered without a session.
    #[error("not authenticated: run `afl auth login`")]
    Unauthenticated,

    #[error("session store error: {0}")]
    Store(String),
}

/// Coarse error category surfaced to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Authentication,
    Connection,
    Unauthenticated,
    Storage,
}

impl AuthError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Connection(_) => ErrorKind::Connection,
            Self::Unauthenticated => ErrorKind::Unauthenticated,
            Self::Store(_) => ErrorKind::Storage,
        }
    }

    /// View the caller must navigate to instead of showing an error.
    #[must_use]
    pub const fn redirect_target(&self) -> Option<View> {
        match self {
            Self::Unauthenticated => Some(View::Entry),
            _ => None,
        }
    }
}

impl From<CoreError> for AuthError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            other => Self::Validation(other.to_string()),
        }
    }
}
