//! # aff-core
//!
//! Core types and error types for the affiliate client.
//!
//! This crate provides the foundational types shared across all `aff-*` crates:
//! - The persisted [`Session`](entities::Session) and its cache-update patch
//! - Affiliate profile, registration, order and address entities
//! - The authentication state machine and the navigable views
//! - Cross-cutting error types
//! - Input normalisation helpers used before any request is sent

pub mod entities;
pub mod enums;
pub mod errors;
pub mod id_serde;
pub mod normalize;

pub use entities::{ProfileCacheUpdate, Session};
pub use enums::{AuthState, View};
pub use errors::CoreError;
