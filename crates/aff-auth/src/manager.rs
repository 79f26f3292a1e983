//! The session manager: login handshake, session guard, and session storage.

use aff_core::entities::RegistrationForm;
use aff_core::normalize::required;
use aff_core::{AuthState, ProfileCacheUpdate, Session, View};

use crate::api::{
    AuthApi, ChangePasswordRequest, LoginReply, LoginRequest, RecoverRequest,
    STATUS_CHANGE_PASSWORD_REQUIRED, STATUS_SUCCESS, TokenPasswordRequest,
};
use crate::error::AuthError;
use crate::store::{PENDING_USER_KEY, SESSION_KEY, SessionStore};

/// Tracing target for session lifecycle events.
pub const TRACING_TARGET: &str = "aff_auth::session";

/// Result of a login the server accepted.
///
/// The two variants are different states, not flavours of success: only
/// `Authenticated` carries a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(Session),
    PasswordChangeRequired { user_id: String },
}

impl LoginOutcome {
    /// View the caller should move to next.
    #[must_use]
    pub const fn next_view(&self) -> View {
        match self {
            Self::Authenticated(_) => View::Dashboard,
            Self::PasswordChangeRequired { .. } => View::SetPassword,
        }
    }

    #[must_use]
    pub const fn state(&self) -> AuthState {
        match self {
            Self::Authenticated(_) => AuthState::Authenticated,
            Self::PasswordChangeRequired { .. } => AuthState::PendingPasswordChange,
        }
    }
}

/// Owns the client-side answer to "is somebody logged in".
///
/// Storage and the remote API are injected capabilities. The manager never
/// navigates; operations return the [`View`] to go to, or an error whose
/// [`AuthError::redirect_target`] says where to go instead.
#[derive(Debug)]
pub struct SessionManager<S, A> {
    store: S,
    api: A,
}

impl<S: SessionStore, A: AuthApi> SessionManager<S, A> {
    pub const fn new(store: S, api: A) -> Self {
        Self { store, api }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Current state as derived from storage.
    pub fn state(&self) -> AuthState {
        if self.restore_session().is_some() {
            AuthState::Authenticated
        } else if self.pending_user_id().is_some() {
            AuthState::PendingPasswordChange
        } else {
            AuthState::Anonymous
        }
    }

    /// User id recorded when the server demanded a password change.
    pub fn pending_user_id(&self) -> Option<String> {
        match self.store.get(PENDING_USER_KEY) {
            Ok(value) => value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            Err(error) => {
                tracing::warn!(target: TRACING_TARGET, %error, "failed to read pending marker");
                None
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// - `AuthError::Validation` if either field is blank (no request is sent).
    /// - `AuthError::Authentication` if the server rejects the login or answers
    ///   with an unknown status or an incomplete success.
    /// - `AuthError::Connection` if no interpretable response arrives.
    /// - `AuthError::Store` if the new state cannot be persisted.
    ///
    /// On error nothing in storage changes.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let email = required("email", email)?;
        required("password", password)?;

        let request = LoginRequest {
            email: email.to_string(),
            senha: password.to_string(),
        };
        let reply = self.api.login(&request).await?;

        match reply.status.as_str() {
            STATUS_SUCCESS => {
                let session = session_from_reply(reply, email)?;
                self.trace_transition(AuthState::Authenticated);
                let previous_pending = self.store.get(PENDING_USER_KEY)?;
                self.store.clear(PENDING_USER_KEY)?;
                if let Err(error) = self.persist(&session) {
                    self.restore_slot(PENDING_USER_KEY, previous_pending.as_deref());
                    return Err(error);
                }
                tracing::info!(target: TRACING_TARGET, user_id = %session.user_id, "logged in");
                Ok(LoginOutcome::Authenticated(session))
            }
            STATUS_CHANGE_PASSWORD_REQUIRED => {
                let user_id = reply
                    .user_id
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .ok_or_else(|| {
                        AuthError::Authentication(
                            "password change required but no user id was returned".into(),
                        )
                    })?;
                self.trace_transition(AuthState::PendingPasswordChange);
                let previous_pending = self.store.get(PENDING_USER_KEY)?;
                self.store.set(PENDING_USER_KEY, &user_id)?;
                if let Err(error) = self.store.clear(SESSION_KEY) {
                    self.restore_slot(PENDING_USER_KEY, previous_pending.as_deref());
                    return Err(error);
                }
                tracing::info!(target: TRACING_TARGET, %user_id, "password change required");
                Ok(LoginOutcome::PasswordChangeRequired { user_id })
            }
            other => {
                tracing::debug!(target: TRACING_TARGET, status = other, "login rejected");
                Err(AuthError::Authentication(reply.message.unwrap_or_else(|| {
                    if other.is_empty() {
                        "login failed".to_string()
                    } else {
                        format!("login failed (status '{other}')")
                    }
                })))
            }
        }
    }

    /// Read the persisted session.
    ///
    /// Missing, unreadable, malformed, or incomplete blobs all read as `None`.
    /// A malformed blob is cleared so the next read starts clean.
    pub fn restore_session(&self) -> Option<Session> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(target: TRACING_TARGET, %error, "failed to read session slot");
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_complete() => Some(session),
            Ok(_) => {
                tracing::warn!(target: TRACING_TARGET, "stored session is incomplete; clearing");
                self.discard_session_slot();
                None
            }
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    %error,
                    "stored session is malformed; clearing"
                );
                self.discard_session_slot();
                None
            }
        }
    }

    /// Guard for protected views.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthenticated` (redirect target: the entry view)
    /// when no session is stored. The caller must not issue protected calls
    /// after this fails.
    pub fn require_session(&self) -> Result<Session, AuthError> {
        if let Some(session) = self.restore_session() {
            return Ok(session);
        }
        tracing::debug!(target: TRACING_TARGET, "protected view entered without a session");
        self.clear_all();
        Err(AuthError::Unauthenticated)
    }

    /// Forget the session and any pending marker. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if a slot could not be removed; the other
    /// slot is still cleared.
    pub fn logout(&self) -> Result<View, AuthError> {
        self.trace_transition(AuthState::Anonymous);
        let session = self.store.clear(SESSION_KEY);
        let pending = self.store.clear(PENDING_USER_KEY);
        session.and(pending)?;
        tracing::info!(target: TRACING_TARGET, "logged out");
        Ok(View::Entry)
    }

    /// Merge refreshed profile fields into the stored session.
    ///
    /// `token` and `userId` are never touched; the whole blob is rewritten.
    ///
    /// # Errors
    ///
    /// - `AuthError::Unauthenticated` if there is no session to update.
    /// - `AuthError::Store` if the slot cannot be written.
    pub fn update_profile_cache(&self, update: &ProfileCacheUpdate) -> Result<Session, AuthError> {
        let mut session = self.restore_session().ok_or(AuthError::Unauthenticated)?;
        if update.is_empty() {
            return Ok(session);
        }
        session.apply(update);
        self.trace_transition(AuthState::Authenticated);
        self.persist(&session)?;
        Ok(session)
    }

    /// Create an account. Login stays an explicit, separate step.
    ///
    /// # Errors
    ///
    /// - `AuthError::Validation` for missing fields (no request is sent).
    /// - `AuthError::Authentication` with the server's reason on rejection.
    /// - `AuthError::Connection` on transport failure.
    pub async fn register(&self, form: RegistrationForm) -> Result<View, AuthError> {
        let payload = form.into_payload()?;
        let reply = self.api.register(&payload).await?;
        tracing::info!(
            target: TRACING_TARGET,
            id = reply.id.as_deref().unwrap_or("?"),
            "account registered"
        );
        Ok(View::Entry)
    }

    /// Ask the server to email a password-reset link.
    ///
    /// # Errors
    ///
    /// - `AuthError::Validation` if `email` is blank.
    /// - `AuthError::Authentication` / `AuthError::Connection` from the API.
    pub async fn recover(&self, email: &str) -> Result<String, AuthError> {
        let email = required("email", email)?;
        let reply = self
            .api
            .recover(&RecoverRequest {
                email: email.to_string(),
            })
            .await?;
        Ok(reply.message.unwrap_or_else(|| {
            "If the address is registered, a reset link has been sent.".to_string()
        }))
    }

    /// Set a new password using the one-time token from a reset link.
    ///
    /// Keyed by the server-issued token only; the locally stored pending user
    /// id is not trusted. Success clears the pending marker and sends the user
    /// to the entry view to log in again.
    ///
    /// # Errors
    ///
    /// - `AuthError::Validation` if either input is blank.
    /// - `AuthError::Authentication` unless the server answers `success`.
    /// - `AuthError::Connection` on transport failure.
    pub async fn set_password_with_token(
        &self,
        reset_token: &str,
        new_password: &str,
    ) -> Result<View, AuthError> {
        let reset_token = required("reset token", reset_token)?;
        required("new password", new_password)?;

        let reply = self
            .api
            .change_password_with_token(&TokenPasswordRequest {
                token: reset_token.to_string(),
                nova_senha: new_password.to_string(),
            })
            .await?;

        if !reply.is_success() {
            return Err(AuthError::Authentication(
                reply
                    .message
                    .unwrap_or_else(|| "reset link is invalid or expired".to_string()),
            ));
        }

        self.trace_transition(AuthState::Anonymous);
        self.store.clear(PENDING_USER_KEY)?;
        tracing::info!(target: TRACING_TARGET, "password set from reset link");
        Ok(View::Entry)
    }

    /// Change the password of the logged-in user.
    ///
    /// # Errors
    ///
    /// - `AuthError::Unauthenticated` without a session.
    /// - `AuthError::Validation` for blank input or an unchanged password.
    /// - `AuthError::Authentication` / `AuthError::Connection` from the API.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<String, AuthError> {
        let session = self.require_session()?;
        required("current password", current_password)?;
        required("new password", new_password)?;
        if current_password == new_password {
            return Err(AuthError::Validation(
                "new password must differ from the current one".into(),
            ));
        }

        let reply = self
            .api
            .change_password(
                &session.user_id,
                &session.token,
                &ChangePasswordRequest {
                    senha_atual: current_password.to_string(),
                    senha_nova: new_password.to_string(),
                },
            )
            .await?;
        Ok(reply
            .message
            .unwrap_or_else(|| "Password changed.".to_string()))
    }

    fn persist(&self, session: &Session) -> Result<(), AuthError> {
        let blob = serde_json::to_string(session)
            .map_err(|e| AuthError::Store(format!("serialize session: {e}")))?;
        self.store.set(SESSION_KEY, &blob)
    }

    fn discard_session_slot(&self) {
        if let Err(error) = self.store.clear(SESSION_KEY) {
            tracing::warn!(target: TRACING_TARGET, %error, "failed to clear session slot");
        }
    }

    fn clear_all(&self) {
        self.discard_session_slot();
        if let Err(error) = self.store.clear(PENDING_USER_KEY) {
            tracing::warn!(target: TRACING_TARGET, %error, "failed to clear pending marker");
        }
    }

    /// Put a slot back to what it held before a failed write. Best effort.
    fn restore_slot(&self, key: &str, previous: Option<&str>) {
        let restored = match previous {
            Some(value) => self.store.set(key, value),
            None => self.store.clear(key),
        };
        if let Err(error) = restored {
            tracing::warn!(target: TRACING_TARGET, key, %error, "failed to roll back slot");
        }
    }

    /// State as stored right now, without clearing malformed slots.
    fn peek_state(&self) -> AuthState {
        let read = |key: &str| self.store.get(key).ok().flatten();
        let has_session = read(SESSION_KEY)
            .and_then(|raw| serde_json::from_str::<Session>(&raw).ok())
            .is_some_and(|session| session.is_complete());
        if has_session {
            AuthState::Authenticated
        } else if read(PENDING_USER_KEY).is_some_and(|v| !v.trim().is_empty()) {
            AuthState::PendingPasswordChange
        } else {
            AuthState::Anonymous
        }
    }

    /// Log the state change an operation is about to make. Never gates it.
    fn trace_transition(&self, to: AuthState) {
        let from = self.peek_state();
        if from == to && to == AuthState::Anonymous {
            return;
        }
        match from.transition_to(to) {
            Ok(_) => tracing::debug!(target: TRACING_TARGET, %from, %to, "session transition"),
            Err(error) => {
                tracing::warn!(target: TRACING_TARGET, %error, "unexpected session transition");
            }
        }
    }
}

fn session_from_reply(reply: LoginReply, login_email: &str) -> Result<Session, AuthError> {
    let token = reply
        .token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AuthError::Authentication("login succeeded but no token was returned".into())
        })?;
    let user_id = reply
        .user_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            AuthError::Authentication("login succeeded but no user id was returned".into())
        })?;

    let email = reply
        .email
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| login_email.to_string());
    let display_name = reply
        .nome
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| email.clone());

    Ok(Session::new(user_id, token, display_name, email).with_role(reply.role))
}
