//
//  reporte-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Reporte API
//!
//! This module provides the request dispatcher every endpoint goes through.
//! It resolves endpoints against the configured base URL, sends JSON,
//! classifies failures into [`ApiError`] and decodes JSON responses.
//!
//! ## Features
//!
//! - Base URL injected once at construction
//! - `Content-Type: application/json` on every request
//! - Status code classification (401/403/404/5xx/other)
//! - Distinct error when the server cannot be reached at all
//! - Pluggable request observer and credential store

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::common::{ApiError, ApiResult};
use super::observer::{RequestObserver, TracingObserver};
use crate::auth::{CredentialStore, Credentials, MemoryCredentialStore};
use crate::config::{normalize_base_url, ApiConfig};

/// The Reporte API client.
///
/// The client is stateless between calls: it holds the base URL, a pooled
/// `reqwest::Client` and shared handles to its collaborators, so it can be
/// used from many tasks at once.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use reporte_client::api::ReporteClient;
/// use reporte_client::auth::KeyringCredentialStore;
///
/// let base_url = "http://localhost:5000";
/// let client = ReporteClient::new(base_url)?
///     .with_credentials(Arc::new(KeyringCredentialStore::new(base_url)));
/// # Ok::<(), reporte_client::api::ApiError>(())
/// ```
///
/// # Notes
///
/// - There are no retries; every call is exactly one HTTP request.
/// - Callers wanting cancellation wrap the call in `tokio::time::timeout`.
#[derive(Clone)]
pub struct ReporteClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL without a trailing slash
    base_url: String,
    /// Source of the logged-in user's id
    credentials: Arc<dyn CredentialStore>,
    /// Receives request lifecycle events
    observer: Arc<dyn RequestObserver>,
}

impl std::fmt::Debug for ReporteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReporteClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn http_client(timeout: Option<Duration>) -> ApiResult<Client> {
    let mut builder = Client::builder().user_agent(format!("reporte/{}", crate::VERSION));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

impl ReporteClient {
    /// Creates a client for `base_url` with no stored credentials and the
    /// tracing observer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when `base_url` is not an absolute
    /// URL, or [`ApiError::Transport`] if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reporte_client::api::ReporteClient;
    ///
    /// let client = ReporteClient::new("http://localhost:5000/")?;
    /// assert_eq!(client.base_url(), "http://localhost:5000");
    /// # Ok::<(), reporte_client::api::ApiError>(())
    /// ```
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::with_http(base_url, http_client(None)?)
    }

    /// Creates a client from the `[api]` configuration section.
    ///
    /// `explicit_url` (command line or environment) wins over the file.
    pub fn from_config(config: &ApiConfig, explicit_url: Option<&str>) -> ApiResult<Self> {
        let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
        Self::with_http(&config.resolve_base_url(explicit_url), http_client(timeout)?)
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_http(base_url: &str, http: Client) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url);
        url::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            http,
            base_url,
            credentials: Arc::new(MemoryCredentialStore::new()),
            observer: Arc::new(TracingObserver),
        })
    }

    /// Sets the credential store used by ownership-checked endpoints.
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Replaces the request observer.
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves `endpoint` against the base URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reporte_client::api::ReporteClient;
    ///
    /// let client = ReporteClient::new("http://localhost:5000")?;
    /// assert_eq!(client.url_for("/reports")?, "http://localhost:5000/reports");
    /// assert_eq!(client.url_for("reports")?, "http://localhost:5000/reports");
    /// # Ok::<(), reporte_client::api::ApiError>(())
    /// ```
    pub fn url_for(&self, endpoint: &str) -> ApiResult<String> {
        let url = if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        };
        url::Url::parse(&url).map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(url)
    }

    /// Sends one request and returns the decoded JSON envelope.
    ///
    /// `body` must already be serialized JSON. A `204 No Content` answer is
    /// returned as `Value::Null` without reading the body.
    ///
    /// # Errors
    ///
    /// - 401 → [`ApiError::AuthenticationFailed`]
    /// - 403 → [`ApiError::AccessForbidden`]
    /// - 404 → [`ApiError::NotFound`]
    /// - 5xx → [`ApiError::ServerError`]
    /// - other non-2xx → [`ApiError::Api`]
    /// - server unreachable → [`ApiError::ConnectionUnreachable`]
    /// - 2xx with a non-JSON body → [`ApiError::Decode`]
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> ApiResult<Value> {
        let url = self.url_for(endpoint)?;
        self.observer.request_start(&method, &url, body.as_deref());

        let result = self.execute(&method, &url, body).await;
        if let Err(error) = &result {
            self.observer.error(&method, &url, error);
        }
        result
    }

    async fn execute(&self, method: &Method, url: &str, body: Option<String>) -> ApiResult<Value> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_transport_error(e, url))?;
        let status = response.status();
        self.observer.response_status(method, url, status.as_u16());

        if let Some(error) = ApiError::from_status(status) {
            return Err(error);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    /// Sends a request with a serializable body and decodes the answer as `T`.
    ///
    /// Use `T = serde_json::Value` to get the raw envelope.
    pub async fn send<T, B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = body.map(to_json_body).transpose()?;
        let value = self.request(method, endpoint, body).await?;
        serde_json::from_value(value).map_err(ApiError::Decode)
    }

    /// Makes an HTTP GET request to the specified endpoint.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.send::<T, Value>(Method::GET, endpoint, None).await
    }

    /// Makes an HTTP POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::POST, endpoint, Some(body)).await
    }

    /// Makes an HTTP POST request without a body (action endpoints).
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.send::<T, Value>(Method::POST, endpoint, None).await
    }

    /// Makes an HTTP PUT request with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::PUT, endpoint, Some(body)).await
    }

    /// Makes an HTTP DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.send::<T, Value>(Method::DELETE, endpoint, None).await
    }

    /// Returns the stored credential record.
    ///
    /// # Errors
    ///
    /// [`ApiError::AuthenticationFailed`] when nobody is logged in.
    pub async fn current_user(&self) -> ApiResult<Credentials> {
        self.credentials
            .load()
            .await
            .map_err(|e| ApiError::CredentialStore(format!("{e:#}")))?
            .ok_or_else(ApiError::not_authenticated)
    }

    /// Checks that `user_id` is the logged-in user before any request goes out.
    ///
    /// This is a fail-fast convenience only; the server makes the real
    /// authorization decision.
    pub async fn ensure_owner(&self, user_id: i64) -> ApiResult<Credentials> {
        let credentials = self.current_user().await?;
        if credentials.user_id != user_id {
            return Err(ApiError::OwnershipMismatch {
                supplied: user_id,
                authenticated: credentials.user_id,
            });
        }
        Ok(credentials)
    }

    /// Probes whether the server answers at all.
    ///
    /// Any HTTP response, whatever its status, counts as reachable.
    pub async fn test_connection(&self) -> bool {
        let url = format!("{}/", self.base_url);
        let method = Method::GET;
        self.observer.request_start(&method, &url, None);

        match self.http.get(&url).send().await {
            Ok(response) => {
                self.observer
                    .response_status(&method, &url, response.status().as_u16());
                true
            }
            Err(e) => {
                self.observer
                    .error(&method, &url, &classify_transport_error(e, &url));
                false
            }
        }
    }
}

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serializes a request body to compact JSON the way `JSON.stringify` does.
///
/// Floats without a fractional part are written as integers (`18`, not
/// `18.0`), so the backend receives the same numbers a browser would send.
/// Key order follows the value's field order.
///
/// # Example
///
/// ```rust
/// use reporte_client::api::client::to_json_body;
/// use serde_json::json;
///
/// let body = to_json_body(&json!({"latitude": 18.0, "longitude": -66.5}))?;
/// assert_eq!(body, r#"{"latitude":18,"longitude":-66.5}"#);
/// # Ok::<(), reporte_client::api::ApiError>(())
/// ```
pub fn to_json_body<B: Serialize + ?Sized>(body: &B) -> ApiResult<String> {
    let mut value = serde_json::to_value(body).map_err(ApiError::Serialize)?;
    integral_floats_as_integers(&mut value);
    serde_json::to_string(&value).map_err(ApiError::Serialize)
}

fn integral_floats_as_integers(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_SAFE_INTEGER {
                    *value = Value::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_floats_as_integers),
        Value::Object(map) => map.values_mut().for_each(integral_floats_as_integers),
        _ => {}
    }
}

/// Maps a transport failure to [`ApiError::ConnectionUnreachable`] when the
/// server could not be reached; anything else passes through.
fn classify_transport_error(error: reqwest::Error, url: &str) -> ApiError {
    if error.is_connect() {
        ApiError::ConnectionUnreachable {
            url: url.to_string(),
        }
    } else {
        ApiError::Transport(error)
    }
}
