use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The persisted authenticated session.
///
/// Serialized as a single JSON blob (`camelCase` keys) and always written as a
/// whole; field merges happen in memory first.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    /// Bearer credential attached to every protected API call.
    pub token: String,
    pub display_name: String,
    pub email: String,
    pub logged_at: DateTime<Utc>,
    /// Role reported by the login endpoint, e.g. `"admin"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Session {
    /// Build a session stamped with the current time.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        token: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
            display_name: display_name.into(),
            email: email.into(),
            logged_at: Utc::now(),
            role: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: Option<String>) -> Self {
        self.role = role.filter(|r| !r.trim().is_empty());
        self
    }

    /// A session without both identifier and token must never be trusted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.user_id.trim().is_empty() && !self.token.trim().is_empty()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| role.trim().eq_ignore_ascii_case("admin"))
    }

    /// Apply cached profile fields. Identity and credential are untouched.
    pub fn apply(&mut self, update: &ProfileCacheUpdate) {
        if let Some(name) = &update.display_name {
            self.display_name.clone_from(name);
        }
        if let Some(email) = &update.email {
            self.email.clone_from(email);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("logged_at", &self.logged_at)
            .field("role", &self.role)
            .finish()
    }
}

/// Profile fields that may be refreshed in a live session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCacheUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfileCacheUpdate {
    #[must_use]
    pub fn display_name(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            email: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_only_display_fields() {
        let mut session = Session::new("7", "abc", "Maria", "maria@example.com");
        session.apply(&ProfileCacheUpdate::display_name("Ana"));
        assert_eq!(session.display_name, "Ana");
        assert_eq!(session.email, "maria@example.com");
        assert_eq!(session.token, "abc");
        assert_eq!(session.user_id, "7");
    }

    #[test]
    fn incomplete_when_token_blank() {
        let session = Session::new("7", "  ", "Maria", "maria@example.com");
        assert!(!session.is_complete());
    }

    #[test]
    fn admin_role_is_case_insensitive() {
        let session = Session::new("1", "t", "Root", "root@example.com")
            .with_role(Some("Admin".into()));
        assert!(session.is_admin());
        let session = Session::new("1", "t", "Ana", "ana@example.com");
        assert!(!session.is_admin());
    }

    #[test]
    fn blank_role_is_dropped() {
        let session = Session::new("1", "t", "Ana", "a@b.c").with_role(Some(" ".into()));
        assert!(session.role.is_none());
    }

    #[test]
    fn debug_output_redacts_token() {
        let session = Session::new("7", "super-secret", "Maria", "maria@example.com");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn blob_uses_camel_case_keys() {
        let session = Session::new("7", "abc", "Maria", "maria@example.com");
        let value = serde_json::to_value(&session).unwrap();
        for key in ["userId", "token", "displayName", "email", "loggedAt"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert!(value.get("role").is_none());
    }
}
