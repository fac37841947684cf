/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Resilient request client for the Nadlan platform API
//!
//! This module provides a client that handles, per logical request:
//! - Default JSON headers and automatic bearer-credential injection
//! - A per-attempt timeout raced against the network call
//! - Bounded retries with exponential backoff for transient failures
//! - Normalization of transport and application failures into [`AppError`]
//!
//! # Example
//! ```ignore
//! use nadlan_client::client::ApiClient;
//! use nadlan_client::config::Config;
//!
//! let client = ApiClient::new(Config::new())?;
//!
//! // Credential injection and retries are handled automatically
//! let listings: serde_json::Value = client.get("/api/listings").await?;
//! ```

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::credentials::{CredentialStore, InMemoryCredentialStore};
use crate::error::AppError;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpInternalClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Per-call options layered on top of the client configuration
///
/// Headers are overlaid on the client's default headers. Timeout and retry
/// count fall back to the [`Config`] values when not set.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Extra headers overlaid on the defaults
    pub headers: Vec<(String, String)>,
    /// Per-attempt timeout in milliseconds (None = config default)
    pub timeout_ms: Option<u64>,
    /// Maximum number of retries after the initial attempt (None = config default)
    pub retries: Option<u32>,
    /// Whether to attach the stored bearer credential (default: true)
    pub auth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            timeout_ms: None,
            retries: None,
            auth: true,
        }
    }
}

impl RequestOptions {
    /// Creates options with all defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables credential injection for this call
    #[must_use]
    pub fn without_auth(mut self) -> Self {
        self.auth = false;
        self
    }

    /// Overrides the per-attempt timeout for this call
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Overrides the retry budget for this call
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Adds a header overlaid on the defaults
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Resilient client for the Nadlan platform REST API
///
/// The client is cheap to clone through `Arc` fields and safe to share:
/// concurrent calls each follow their own independent retry timeline, and
/// the credential store is only read, never written, by the client.
pub struct ApiClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Creates a new client with an empty in-memory credential store
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and default policy
    ///
    /// # Returns
    /// * `Ok(ApiClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_credentials(config, Arc::new(InMemoryCredentialStore::new()))
    }

    /// Creates a new client with an injected credential store
    pub fn with_credentials(
        config: Config,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            credentials,
        })
    }

    /// Gets the credential store, so callers can set the token after login
    /// and clear it on logout or on an authentication failure
    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Gets the client configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>, RequestOptions::default())
            .await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body), RequestOptions::default())
            .await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body), RequestOptions::default())
            .await
    }

    /// Makes a PATCH request
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, path, Some(body), RequestOptions::default())
            .await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<()>, RequestOptions::default())
            .await
    }

    /// Makes a request with explicit method, body and options
    ///
    /// `path` may be an absolute URL or a path relative to the configured
    /// base URL. The body only travels on non-GET methods. On success the
    /// deserialized response body is returned directly; on failure the most
    /// recent [`AppError`] after the retry budget is exhausted.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
        options: RequestOptions,
    ) -> Result<T, AppError> {
        let url = self.resolve_url(path);
        let headers = self.build_headers(&options)?;
        let timeout = Duration::from_millis(options.timeout_ms.unwrap_or(self.config.timeout_ms));
        let retries = options
            .retries
            .unwrap_or_else(|| self.config.retry.max_retries());

        // Serialize once, before the attempt loop
        let body = match body {
            Some(b) if method != Method::GET => {
                Some(serde_json::to_value(&b).map_err(|e| AppError::Serialization(e.to_string()))?)
            }
            _ => None,
        };

        let mut attempt: u32 = 0;
        loop {
            debug!("{} {} (attempt {}/{})", method, url, attempt + 1, retries + 1);

            match self
                .attempt(&method, &url, &headers, body.as_ref(), timeout)
                .await
            {
                Ok(value) => {
                    return serde_json::from_value(value)
                        .map_err(|e| AppError::Deserialization(e.to_string()));
                }
                Err(err) if attempt >= retries || !err.is_retryable() => {
                    error!("{} {} failed after {} attempt(s): {}", method, url, attempt + 1, err);
                    return Err(err);
                }
                Err(err) => {
                    let delay = self.config.retry.backoff_delay(attempt);
                    warn!(
                        "{} {} failed (attempt {}): {}. Retrying in {}ms...",
                        method,
                        url,
                        attempt + 1,
                        err,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Performs a single attempt: one send raced against the timeout timer
    async fn attempt(
        &self,
        method: &Method,
        url: &str,
        headers: &HeaderMap,
        body: Option<&Value>,
        timeout: Duration,
    ) -> Result<Value, AppError> {
        let mut request = self
            .http_client
            .request(method.clone(), url)
            .headers(headers.clone());

        if let Some(body) = body {
            request = request.json(body);
        }

        // The losing send future is dropped here, so a response arriving
        // after the timer fired cannot resurface or double-fire.
        let response = match tokio::time::timeout(timeout, request.send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(AppError::from(e)),
            Err(_) => return Err(AppError::timeout(timeout)),
        };

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let text = response.text().await?;
            if text.is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&text)
                .map_err(|e| AppError::Deserialization(e.to_string()));
        }

        let text = response.text().await.unwrap_or_default();
        let data: Value =
            serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Err(AppError::from_response(status, data))
    }

    /// Default headers overlaid with the per-call headers
    ///
    /// `auth == false` strips the Authorization header entirely, including a
    /// caller-supplied one.
    fn build_headers(&self, options: &RequestOptions) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if options.auth {
            if let Some(token) = self.credentials.get() {
                let value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| AppError::InvalidInput(format!("invalid credential: {e}")))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::InvalidInput(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::InvalidInput(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        if !options.auth {
            headers.remove(AUTHORIZATION);
        }

        Ok(headers)
    }

    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
        }
    }
}
