//! Profile save: remote update first, then the session's cached fields.

use aff_auth::{AuthApi, SessionManager, SessionStore};
use aff_core::ProfileCacheUpdate;
use aff_core::entities::{AffiliateProfile, ProfileUpdate};

use crate::client::AffiliateClient;
use crate::error::ApiError;

/// Save the logged-in affiliate's profile and refresh the cached display
/// fields so the next view renders the new name without a round trip.
///
/// The session is only touched after the server accepted the update.
///
/// # Errors
///
/// - `ApiError::Auth(Unauthenticated)` without a session (no request is sent).
/// - `ApiError::Validation` for an empty patch.
/// - Transport, rejection and storage errors.
pub async fn save_profile<S, A>(
    manager: &SessionManager<S, A>,
    client: &AffiliateClient,
    update: ProfileUpdate,
) -> Result<AffiliateProfile, ApiError>
where
    S: SessionStore,
    A: AuthApi,
{
    let session = manager.require_session()?;
    let profile = client.update_profile(&session, update).await?;

    let cache = ProfileCacheUpdate {
        display_name: Some(profile.name.clone()).filter(|n| !n.trim().is_empty()),
        email: Some(profile.email.clone()).filter(|e| !e.trim().is_empty()),
    };
    manager.update_profile_cache(&cache)?;
    Ok(profile)
}
