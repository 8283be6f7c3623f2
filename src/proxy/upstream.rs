//! Outbound client for the fixed backend origin.
//!
//! # Responsibilities
//! - Build the target URL (origin + inbound path, query string verbatim)
//! - Issue the outbound request with the method matching the inbound one
//! - Parse and re-serialize the JSON body for body-carrying methods
//! - Return the backend's status, headers, and raw body bytes unmodified
//!
//! # Design Decisions
//! - One outbound request per inbound request, no retries
//! - The path is appended verbatim; no normalization or re-encoding
//! - Response headers pass through untouched, hop-by-hop included
//! - Timeouts come from config, fixed at construction

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};

use crate::config::{BackendConfig, TimeoutConfig};
use crate::http::request::X_REQUEST_ID;
use crate::proxy::error::ProxyError;
use crate::proxy::method::ProxyMethod;

/// A buffered backend response: status, headers, and raw body bytes.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Client for the single configured backend origin.
pub struct UpstreamClient {
    client: reqwest::Client,
    /// Origin with any trailing slash removed, so path concatenation is
    /// always `origin + "/..."`.
    origin: String,
}

impl UpstreamClient {
    /// Create a client for the given backend, with timeouts applied.
    pub fn new(backend: &BackendConfig, timeouts: &TimeoutConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()?;

        Ok(Self {
            client,
            origin: backend.origin.trim_end_matches('/').to_string(),
        })
    }

    /// Target URL for an inbound path-and-query, appended verbatim.
    fn target_url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.origin, path_and_query)
    }

    /// Forward one request and buffer the backend's response.
    ///
    /// `path_and_query` is the inbound request's full path plus query
    /// string, exactly as received. `body` is the raw inbound body; it is
    /// only consulted for body-carrying methods.
    pub async fn forward(
        &self,
        method: ProxyMethod,
        path_and_query: &str,
        request_id: &str,
        body: Bytes,
    ) -> Result<UpstreamResponse, ProxyError> {
        let url = self.target_url(path_and_query);

        let mut request = match method {
            ProxyMethod::Get => self.client.get(&url),
            ProxyMethod::Post => self.client.post(&url),
            ProxyMethod::Put => self.client.put(&url),
            ProxyMethod::Delete => self.client.delete(&url),
            ProxyMethod::Patch => self.client.patch(&url),
        };

        request = request.header(X_REQUEST_ID, request_id);

        // An absent body forwards as an absent body, not as JSON null.
        if method.carries_body() && !body.is_empty() {
            let value: serde_json::Value =
                serde_json::from_slice(&body).map_err(ProxyError::MalformedBody)?;
            request = request.json(&value);
        }

        let response = request.send().await.map_err(ProxyError::Upstream)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(ProxyError::UpstreamBody)?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}
