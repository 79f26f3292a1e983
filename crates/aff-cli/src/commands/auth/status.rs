use aff_auth::SessionStore;
use aff_core::AuthState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    state: AuthState,
    user_id: Option<String>,
    display_name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    logged_at: Option<String>,
    pending_user_id: Option<String>,
    store: &'static str,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&status(ctx), flags.format)
}

fn status(ctx: &AppContext) -> AuthStatusResponse {
    let state = ctx.manager.state();
    let session = ctx.manager.restore_session();
    let pending_user_id = ctx.manager.pending_user_id();
    let store = ctx.manager.store().backend_name();

    match session {
        Some(session) => AuthStatusResponse {
            state,
            user_id: Some(session.user_id),
            display_name: Some(session.display_name),
            email: Some(session.email),
            role: session.role,
            logged_at: Some(session.logged_at.to_rfc3339()),
            pending_user_id,
            store,
        },
        None => AuthStatusResponse {
            state,
            user_id: None,
            display_name: None,
            email: None,
            role: None,
            logged_at: None,
            pending_user_id,
            store,
        },
    }
}

#[cfg(test)]
mod tests {
    use aff_auth::store::{PENDING_USER_KEY, SESSION_KEY};
    use aff_config::{AffConfig, StorageBackend, StorageConfig};
    use aff_core::Session;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    fn memory_context() -> AppContext {
        let config = AffConfig {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                ..StorageConfig::default()
            },
            ..AffConfig::default()
        };
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
        };
        AppContext::init(config, &flags).unwrap()
    }

    #[test]
    fn anonymous_without_stored_state() {
        let response = status(&memory_context());
        assert_eq!(response.state, AuthState::Anonymous);
        assert_eq!(response.store, "memory");
    }

    #[test]
    fn malformed_session_with_marker_reports_pending() {
        let ctx = memory_context();
        let store = ctx.manager.store();
        store.set(SESSION_KEY, "{not json").unwrap();
        store.set(PENDING_USER_KEY, "42").unwrap();

        let response = status(&ctx);
        assert_eq!(response.state, AuthState::PendingPasswordChange);
        assert_eq!(response.user_id, None);
        assert_eq!(response.pending_user_id.as_deref(), Some("42"));
    }

    #[test]
    fn stored_session_reports_authenticated() {
        let ctx = memory_context();
        let session = Session::new("7", "abc", "Maria", "maria@example.com");
        ctx.manager
            .store()
            .set(SESSION_KEY, &serde_json::to_string(&session).unwrap())
            .unwrap();

        let response = status(&ctx);
        assert_eq!(response.state, AuthState::Authenticated);
        assert_eq!(response.user_id.as_deref(), Some("7"));
        assert_eq!(response.display_name.as_deref(), Some("Maria"));
    }
}
