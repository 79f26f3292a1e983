//! Reqwest-backed JSON transport and the production [`AuthApi`].

use std::sync::Arc;
use std::time::Duration;

use aff_core::entities::RegistrationPayload;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{
    AuthApi, ChangePasswordRequest, LoginReply, LoginRequest, RecoverRequest, StatusReply,
    TokenPasswordRequest,
};
use crate::error::AuthError;

/// Tracing target for HTTP calls.
pub const TRACING_TARGET: &str = "aff_auth::http";

struct JsonClientInner {
    http: Client,
    base_url: String,
}

/// Thin JSON-over-HTTPS client bound to one API base URL.
///
/// Every call is one-shot. Failures map onto the error kinds the view layer
/// understands: transport problems and unreadable bodies become
/// [`AuthError::Connection`], non-2xx answers become
/// [`AuthError::Authentication`] with the server's `detail`/`message`.
#[derive(Clone)]
pub struct JsonClient {
    inner: Arc<JsonClientInner>,
}

impl std::fmt::Debug for JsonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl JsonClient {
    /// # Errors
    ///
    /// Returns `AuthError::Connection` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("afiliados/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AuthError::Connection(format!("failed to create HTTP client: {e}")))?;

        tracing::debug!(
            target: TRACING_TARGET,
            base_url,
            timeout_ms = timeout.as_millis(),
            "created JSON client"
        );

        Ok(Self {
            inner: Arc::new(JsonClientInner {
                http,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    /// # Errors
    ///
    /// See the type-level docs for the error mapping.
    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
    ) -> Result<R, AuthError> {
        let request = self.request(Method::GET, path, bearer);
        self.send(request, "GET", path).await
    }

    /// # Errors
    ///
    /// See the type-level docs for the error mapping.
    pub async fn post<B, R>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<R, AuthError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, bearer).json(body);
        self.send(request, "POST", path).await
    }

    /// # Errors
    ///
    /// See the type-level docs for the error mapping.
    pub async fn put<B, R>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<R, AuthError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path, bearer).json(body);
        self.send(request, "PUT", path).await
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        let request = self.inner.http.request(method, self.url(path));
        match bearer {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<R, AuthError> {
        tracing::debug!(target: TRACING_TARGET, method, path, "sending request");

        let response = request.send().await.map_err(|error| {
            tracing::debug!(target: TRACING_TARGET, method, path, %error, "request failed");
            AuthError::Connection(describe_transport_error(&error))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Connection(format!("failed to read response: {e}")))?;

        tracing::debug!(
            target: TRACING_TARGET,
            method,
            path,
            status = status.as_u16(),
            "response received"
        );

        if !status.is_success() {
            return Err(AuthError::Authentication(rejection_message(
                status.as_u16(),
                &body,
            )));
        }

        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        serde_json::from_str(body)
            .map_err(|e| AuthError::Connection(format!("unreadable response from {path}: {e}")))
    }
}

fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "could not reach the server".to_string()
    } else {
        error.to_string()
    }
}

/// Human-readable message for a non-2xx reply.
///
/// Prefers `detail` (a string, or the first `msg` of a validation list), then
/// `message`, then a generic status line.
#[must_use]
pub fn rejection_message(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    if let Some(value) = parsed {
        let detail = match value.get("detail") {
            Some(Value::String(s)) => Some(s.as_str()),
            Some(Value::Array(items)) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(Value::as_str),
            _ => None,
        };
        let message = detail.or_else(|| value.get("message").and_then(Value::as_str));
        if let Some(message) = message.map(str::trim).filter(|m| !m.is_empty()) {
            return message.to_string();
        }
    }
    format!("request rejected (HTTP {status})")
}

/// Production [`AuthApi`] speaking to the remote `/auth/*` endpoints.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: JsonClient,
}

impl HttpAuthApi {
    #[must_use]
    pub const fn new(client: JsonClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub const fn client(&self) -> &JsonClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, AuthError> {
        self.client.post("auth/login", request, None).await
    }

    async fn register(&self, payload: &RegistrationPayload) -> Result<StatusReply, AuthError> {
        self.client.post("auth/register", payload, None).await
    }

    async fn recover(&self, request: &RecoverRequest) -> Result<StatusReply, AuthError> {
        self.client.post("auth/recover", request, None).await
    }

    async fn change_password_with_token(
        &self,
        request: &TokenPasswordRequest,
    ) -> Result<StatusReply, AuthError> {
        self.client
            .post("auth/change-password-token", request, None)
            .await
    }

    async fn change_password(
        &self,
        user_id: &str,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> Result<StatusReply, AuthError> {
        let path = format!("auth/change-password/{}", urlencoding::encode(user_id));
        self.client.post(&path, request, Some(token)).await
    }
}
