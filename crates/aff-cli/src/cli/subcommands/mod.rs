pub mod admin;
pub mod auth;
pub mod profile;

pub use admin::AdminCommands;
pub use auth::AuthCommands;
pub use profile::{ProfileCommands, ProfileFieldArgs};
