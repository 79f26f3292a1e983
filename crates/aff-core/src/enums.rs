//! Session states, person types, and navigable views.
//!
//! All enums use `snake_case` serialization unless the remote API dictates a
//! different spelling. [`AuthState`] provides `allowed_next_states()` to
//! enforce valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AuthState
// ---------------------------------------------------------------------------

/// Client-side authentication state, derived from what is persisted.
///
/// ```text
/// anonymous → pending_password_change → anonymous      (reset link used)
///           → authenticated           → authenticated  (profile save, re-login)
///                                     → anonymous      (logout, guard failure)
/// ```
///
/// A pending marker and a session never coexist, so a re-login from either
/// non-anonymous state simply replaces whatever was stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    Anonymous,
    PendingPasswordChange,
    Authenticated,
}

impl AuthState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Anonymous => &[Self::PendingPasswordChange, Self::Authenticated],
            Self::PendingPasswordChange => &[
                Self::Anonymous,
                Self::PendingPasswordChange,
                Self::Authenticated,
            ],
            Self::Authenticated => &[
                Self::Anonymous,
                Self::PendingPasswordChange,
                Self::Authenticated,
            ],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Checked transition.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` when `next` is not reachable
    /// from `self`.
    pub fn transition_to(self, next: Self) -> Result<Self, crate::CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(crate::CoreError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::PendingPasswordChange => "pending_password_change",
            Self::Authenticated => "authenticated",
        }
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PersonType
// ---------------------------------------------------------------------------

/// Legal person type of an affiliate: individual (`PF`) or company (`PJ`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PersonType {
    #[default]
    #[serde(rename = "PF")]
    Individual,
    #[serde(rename = "PJ")]
    Company,
}

impl PersonType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "PF",
            Self::Company => "PJ",
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PersonType {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PF" => Ok(Self::Individual),
            "PJ" => Ok(Self::Company),
            other => Err(crate::CoreError::validation(format!(
                "person type must be PF or PJ, got '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// A navigable view of the dashboard.
///
/// Session operations never navigate themselves; they return the view the
/// caller should move to and a view adapter performs the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Login form; where unauthenticated users land.
    Entry,
    Register,
    Dashboard,
    /// Password-set form reached from a reset link.
    SetPassword,
    Admin,
}

impl View {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::SetPassword => "set_password",
            Self::Admin => "admin",
        }
    }

    /// Whether the view requires an authenticated session.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard | Self::Admin)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
