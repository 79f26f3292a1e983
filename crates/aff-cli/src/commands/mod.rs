pub mod admin;
pub mod auth;
pub mod cep;
pub mod dashboard;
pub mod dispatch;
pub mod link;
pub mod profile;
pub mod register;

use aff_api::ApiError;
use aff_auth::Outcome;

/// Lift an `aff-api` result into the outcome the adapter understands.
pub fn api_outcome<T>(result: Result<T, ApiError>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::Ok(value),
        Err(error) => error.into(),
    }
}
