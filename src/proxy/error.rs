//! Forwarding error taxonomy.
//!
//! # Design Decisions
//! - Internal distinction between request-side, network, and response-side
//!   failures for diagnostics (log fields, metric labels)
//! - Collapsed at the HTTP boundary into a single 503 payload; the wire
//!   contract never varies by cause

use thiserror::Error;

/// Everything that can go wrong while forwarding one request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The inbound body on a body-carrying method is not valid JSON.
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// The outbound call failed before a response arrived (DNS failure,
    /// connection refused, timeout).
    #[error("upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),

    /// The backend answered, but its body could not be read in full.
    #[error("failed to read upstream response body: {0}")]
    UpstreamBody(#[source] reqwest::Error),
}

impl ProxyError {
    /// Stable short name for metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::MalformedBody(_) => "malformed_body",
            ProxyError::Upstream(_) => "upstream",
            ProxyError::UpstreamBody(_) => "upstream_body",
        }
    }
}
