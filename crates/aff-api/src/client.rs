//! Affiliate-Data API: profile, balance, orders, and the admin endpoints.

use aff_auth::JsonClient;
use aff_core::Session;
use aff_core::entities::{AffiliateProfile, Balance, Order, ProfileUpdate};

use crate::error::ApiError;

/// Tracing target for affiliate data calls.
pub const TRACING_TARGET: &str = "aff_api::client";

/// Client for the session-scoped affiliate endpoints.
///
/// Every call takes the caller's [`Session`] and sends its token as a bearer
/// credential. Admin calls additionally require [`Session::is_admin`] and fail
/// with [`ApiError::Forbidden`] before any request is made.
#[derive(Debug, Clone)]
pub struct AffiliateClient {
    http: JsonClient,
}

impl AffiliateClient {
    #[must_use]
    pub const fn new(http: JsonClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Transport and rejection errors from the API.
    pub async fn profile(&self, session: &Session) -> Result<AffiliateProfile, ApiError> {
        self.get_user(session, &session.user_id).await
    }

    /// Send a sparse patch for the logged-in affiliate; returns the stored record.
    ///
    /// # Errors
    ///
    /// `ApiError::Validation` if the patch is empty after normalisation, then
    /// transport and rejection errors from the API.
    pub async fn update_profile(
        &self,
        session: &Session,
        update: ProfileUpdate,
    ) -> Result<AffiliateProfile, ApiError> {
        self.put_user(session, &session.user_id, update).await
    }

    /// # Errors
    ///
    /// Transport and rejection errors from the API.
    pub async fn balance(&self, session: &Session) -> Result<Balance, ApiError> {
        let path = format!("auth/saldo/{}", urlencoding::encode(&session.user_id));
        Ok(self.http.get(&path, Some(session.token.as_str())).await?)
    }

    /// # Errors
    ///
    /// Transport and rejection errors from the API.
    pub async fn orders(&self, session: &Session) -> Result<Vec<Order>, ApiError> {
        let path = format!("auth/pedidos/{}", urlencoding::encode(&session.user_id));
        let orders: Vec<Order> = self.http.get(&path, Some(session.token.as_str())).await?;
        tracing::debug!(target: TRACING_TARGET, count = orders.len(), "orders loaded");
        Ok(orders)
    }

    /// # Errors
    ///
    /// `ApiError::Forbidden` for non-admin sessions, then API errors.
    pub async fn list_affiliates(
        &self,
        session: &Session,
    ) -> Result<Vec<AffiliateProfile>, ApiError> {
        require_admin(session)?;
        Ok(self.http.get("auth/users", Some(session.token.as_str())).await?)
    }

    /// # Errors
    ///
    /// `ApiError::Forbidden` for non-admin sessions, then API errors.
    pub async fn affiliate(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<AffiliateProfile, ApiError> {
        require_admin(session)?;
        self.get_user(session, id).await
    }

    /// # Errors
    ///
    /// `ApiError::Forbidden` for non-admin sessions, `ApiError::Validation`
    /// for an empty patch, then API errors.
    pub async fn update_affiliate(
        &self,
        session: &Session,
        id: &str,
        update: ProfileUpdate,
    ) -> Result<AffiliateProfile, ApiError> {
        require_admin(session)?;
        self.put_user(session, id, update).await
    }

    async fn get_user(&self, session: &Session, id: &str) -> Result<AffiliateProfile, ApiError> {
        let path = user_path(id)?;
        Ok(self.http.get(&path, Some(session.token.as_str())).await?)
    }

    async fn put_user(
        &self,
        session: &Session,
        id: &str,
        update: ProfileUpdate,
    ) -> Result<AffiliateProfile, ApiError> {
        let path = user_path(id)?;
        let update = update.normalized();
        if update.is_empty() {
            return Err(ApiError::Validation("nothing to update".into()));
        }
        let profile: AffiliateProfile = self
            .http
            .put(&path, &update, Some(session.token.as_str()))
            .await?;
        tracing::info!(target: TRACING_TARGET, id = %profile.id, "affiliate updated");
        Ok(profile)
    }
}

fn user_path(id: &str) -> Result<String, ApiError> {
    let id = aff_core::normalize::required("affiliate id", id)?;
    Ok(format!("auth/user/{}", urlencoding::encode(id)))
}

fn require_admin(session: &Session) -> Result<(), ApiError> {
    if session.is_admin() {
        Ok(())
    } else {
        tracing::debug!(target: TRACING_TARGET, user_id = %session.user_id, "admin call refused");
        Err(ApiError::Forbidden)
    }
}

/// Admin table filter: keep affiliates whose name, email or CPF/CNPJ contains
/// `term`, ignoring case. A blank term keeps everything.
#[must_use]
pub fn filter_affiliates<'a>(
    affiliates: &'a [AffiliateProfile],
    term: &str,
) -> Vec<&'a AffiliateProfile> {
    affiliates.iter().filter(|a| a.matches(term)).collect()
}
