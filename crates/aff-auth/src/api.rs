//! Authentication API seam: request/response shapes and the [`AuthApi`] trait.
//!
//! [`crate::http::HttpAuthApi`] is the production implementation; tests swap in
//! fakes that script replies and count calls.

use aff_core::entities::RegistrationPayload;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Login status meaning "credentials accepted, here is a token".
pub const STATUS_SUCCESS: &str = "success";

/// Login status meaning "credentials accepted, but a new password must be set".
pub const STATUS_CHANGE_PASSWORD_REQUIRED: &str = "change_password_required";

/// `POST /auth/login`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Body of a 2xx `POST /auth/login` reply.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoginReply {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, alias = "id", deserialize_with = "aff_core::id_serde::option")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// `POST /auth/recover`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecoverRequest {
    pub email: String,
}

/// `POST /auth/change-password-token`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TokenPasswordRequest {
    pub token: String,
    pub nova_senha: String,
}

/// `POST /auth/change-password/{userId}`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    pub senha_atual: String,
    pub senha_nova: String,
}

/// Generic `{status?, message?}` reply used by the password and register endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StatusReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "aff_core::id_serde::option")]
    pub id: Option<String>,
}

impl StatusReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}

/// One-shot calls to the Authentication API.
///
/// Implementations map a transport failure or unreadable body to
/// [`AuthError::Connection`] and a non-2xx status to
/// [`AuthError::Authentication`] carrying the server's message. No retries.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, AuthError>;

    async fn register(&self, payload: &RegistrationPayload) -> Result<StatusReply, AuthError>;

    async fn recover(&self, request: &RecoverRequest) -> Result<StatusReply, AuthError>;

    async fn change_password_with_token(
        &self,
        request: &TokenPasswordRequest,
    ) -> Result<StatusReply, AuthError>;

    /// Authenticated with the session's bearer `token`.
    async fn change_password(
        &self,
        user_id: &str,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> Result<StatusReply, AuthError>;
}
