//! Entity structs for the affiliate client.
//!
//! Wire-facing structs keep the remote API's field names through serde
//! renames; Rust-side names are English. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

mod address;
mod affiliate;
mod order;
mod registration;
mod session;

pub use address::Address;
pub use affiliate::{AffiliateProfile, ProfileUpdate};
pub use order::{Balance, Order};
pub use registration::{RegistrationForm, RegistrationPayload};
pub use session::{ProfileCacheUpdate, Session};
