//! Response construction at the HTTP boundary.
//!
//! # Responsibilities
//! - Relay a buffered backend response to the client unmodified
//! - Collapse every ProxyError into the fixed 503 payload
//! - Fixed payloads for the health endpoint and root redirect
//!
//! # Design Decisions
//! - Backend headers pass through verbatim, hop-by-hop included
//! - The error payload never varies by cause; diagnostics live in logs
//!   and metrics only

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::proxy::UpstreamResponse;

/// Path the root route redirects to.
pub const CHATBOT_PAGE: &str = "/simple-chatbot.html";

/// Fixed liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// Fixed error payload for any forwarding failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Build the client-facing response from a backend response.
///
/// Status, headers, and body bytes are relayed as received.
pub fn from_upstream(upstream: UpstreamResponse) -> Response {
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = upstream.status;
    *response.headers_mut() = upstream.headers;
    response
}

/// The single externally visible failure: 503 with a fixed JSON body.
pub fn backend_unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorBody {
            error: "Backend service unavailable",
        }),
    )
        .into_response()
}

/// 200 with the fixed health payload; never consults the backend.
pub fn health_ok() -> Response {
    Json(HealthStatus {
        status: "healthy",
        service: "frontend",
    })
    .into_response()
}

/// 302 redirect to the static chatbot page.
pub fn chatbot_redirect() -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, CHATBOT_PAGE)],
    )
        .into_response()
}
