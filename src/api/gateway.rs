//! Gateway: the single point of contact with the remote API.
//!
//! [`Gateway`] is the seam between endpoint logic and the network. The
//! client talks to it only; [`HttpGateway`] is the reqwest-backed
//! implementation, and tests substitute stubs.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult, TransportError};

/// Issues one request and returns the parsed JSON body.
///
/// Implementations make exactly one attempt per call. Non-2xx statuses
/// must surface as [`ApiError::Transport`] and an unparseable body as
/// [`ApiError::Decode`].
pub trait Gateway: Send + Sync {
    fn fetch(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
    ) -> impl Future<Output = ApiResult<Value>> + Send;
}

impl<G: Gateway> Gateway for Arc<G> {
    fn fetch(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
    ) -> impl Future<Output = ApiResult<Value>> + Send {
        (**self).fetch(method, path, headers)
    }
}

/// Combine request headers. Later layers win on conflict:
/// `content-type: application/json` < `defaults` < `overrides`.
pub fn merge_headers(defaults: &HeaderMap, overrides: HeaderMap) -> HeaderMap {
    let mut merged = HeaderMap::new();
    merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in defaults {
        merged.insert(name.clone(), value.clone());
    }
    for (name, value) in &overrides {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

/// reqwest-backed [`Gateway`] holding one pooled connection context.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http_client: Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl HttpGateway {
    /// Create a gateway rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: Option<&str>,
        default_headers: HeaderMap,
    ) -> ApiResult<Self> {
        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Gateway for HttpGateway {
    async fn fetch(&self, method: Method, path: &str, headers: HeaderMap) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let headers = merge_headers(&self.default_headers, headers);

        tracing::debug!(method = %method, url = %url, "Sending request");
        let response = self
            .http_client
            .request(method, &url)
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, url = %url, "Received response");
        if !status.is_success() {
            let error = TransportError::from(status);
            tracing::warn!(status = error.status, kind = ?error.kind, url = %url, "Request failed");
            return Err(error.into());
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::decode(format!("response body of {}", path), e))
    }
}
