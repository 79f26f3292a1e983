//! # aff-api
//!
//! Session-scoped calls to the Affiliate-Data API (profile, balance, orders,
//! admin listing and editing), the public CEP lookup, and tracked-link
//! building.
//!
//! Calls reuse the JSON transport from `aff-auth`, so transport failures and
//! rejections surface with the same error kinds as the login flow.

pub mod client;
pub mod error;
pub mod links;
pub mod postal;
pub mod profile;

pub use client::{AffiliateClient, filter_affiliates};
pub use error::ApiError;
pub use links::tracked_link;
pub use postal::PostalClient;
pub use profile::save_profile;
