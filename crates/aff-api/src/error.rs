use aff_auth::{AuthError, ErrorKind, Outcome};
use aff_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Admin-only call attempted by a non-admin session. Nothing was sent.
    #[error("this action requires an admin session")]
    Forbidden,

    #[error("{0}")]
    Validation(String),

    /// The third-party postal service could not be reached or read.
    #[error("postal lookup failed: {0}")]
    Postal(String),
}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(inner) => inner.kind(),
            Self::Forbidden => ErrorKind::Authentication,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Postal(_) => ErrorKind::Connection,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl<T> From<ApiError> for Outcome<T> {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Auth(inner) => inner.into(),
            other => Self::Error {
                kind: other.kind(),
                message: other.to_string(),
            },
        }
    }
}
