//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Dispatch `/api/*` requests to the upstream client
//! - Serve the fixed routes (root redirect, health)
//! - Observability (metrics, request IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::http::response;
use crate::observability::metrics;
use crate::proxy::{ProxyMethod, UpstreamClient};

/// Largest inbound body the gateway will buffer for forwarding.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// HTTP server for the frontend gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The configuration is taken by value; nothing reads it from global
    /// state after this point.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let upstream = Arc::new(UpstreamClient::new(&config.backend, &config.timeouts)?);

        let state = AppState { upstream };
        let router = Self::build_router(&config, state);

        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let proxy_path = format!("{}/{{*tail}}", config.backend.prefix);

        Router::new()
            .route(
                &proxy_path,
                get(proxy_handler)
                    .post(proxy_handler)
                    .put(proxy_handler)
                    .delete(proxy_handler)
                    .patch(proxy_handler),
            )
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Main proxy handler: forwards `/api/*` to the backend origin.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id().to_string();

    let method = match ProxyMethod::from_http(request.method()) {
        Some(m) => m,
        // The route table only registers supported methods; this is the
        // backstop for direct handler reuse.
        None => return StatusCode::METHOD_NOT_ALLOWED.into_response(),
    };

    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    tracing::debug!(
        request_id = %request_id,
        method = method.as_str(),
        path = %path_and_query,
        "Proxying request"
    );

    let body = request.into_body();
    let body_bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                error = %e,
                "Failed to read request body"
            );
            metrics::record_upstream_error("malformed_body");
            metrics::record_request(method.as_str(), 503, "api", start_time);
            return response::backend_unavailable();
        }
    };

    match state
        .upstream
        .forward(method, &path_and_query, &request_id, body_bytes)
        .await
    {
        Ok(upstream) => {
            let status = upstream.status;
            tracing::debug!(
                request_id = %request_id,
                status = %status,
                "Backend responded"
            );
            metrics::record_request(method.as_str(), status.as_u16(), "api", start_time);
            response::from_upstream(upstream)
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                kind = e.kind(),
                error = %e,
                "Forwarding failed"
            );
            metrics::record_upstream_error(e.kind());
            metrics::record_request(method.as_str(), 503, "api", start_time);
            response::backend_unavailable()
        }
    }
}

/// Root route: unconditional redirect to the chatbot page.
async fn root_handler() -> Response {
    let start_time = Instant::now();
    let response = response::chatbot_redirect();
    metrics::record_request("GET", response.status().as_u16(), "root", start_time);
    response
}

/// Liveness endpoint. Does not probe the backend.
async fn health_handler() -> Response {
    let start_time = Instant::now();
    let response = response::health_ok();
    metrics::record_request("GET", response.status().as_u16(), "health", start_time);
    response
}
