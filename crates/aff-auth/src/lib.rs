//! # aff-auth
//!
//! Session lifecycle for the affiliate client.
//!
//! Provides the login handshake with its forced-password-change branch, the
//! session guard for protected views, token-based password reset, pluggable
//! session storage (file, OS keychain via `keyring`, in-memory), and the
//! reqwest-backed JSON transport shared with `aff-api`.

pub mod api;
pub mod error;
pub mod http;
pub mod manager;
pub mod outcome;
pub mod reset_link;
pub mod store;

pub use api::AuthApi;
pub use error::{AuthError, ErrorKind};
pub use http::{HttpAuthApi, JsonClient};
pub use manager::{LoginOutcome, SessionManager};
pub use outcome::{Outcome, ViewAdapter};
pub use store::{FileStore, KeyringStore, MemoryStore, SessionStore};
