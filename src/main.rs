//! Frontend Gateway
//!
//! A thin HTTP front-end built with Tokio and Axum. It forwards `/api/*`
//! requests to a fixed backend origin, redirects the root path to the
//! static chatbot page, and exposes a liveness endpoint.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │               FRONTEND GATEWAY                 │
//!                    │                                                │
//!   Client Request   │  ┌─────────┐    ┌──────────────┐              │
//!   ─────────────────┼─▶│  http   │───▶│    proxy     │──────────────┼──▶ Backend
//!                    │  │ server  │    │   upstream   │              │    API
//!   Client Response  │  └────┬────┘    └──────────────┘              │
//!   ◀────────────────┼───────┘   /        → 302 chatbot page         │
//!                    │           /health  → fixed liveness payload   │
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │  config · observability · lifecycle      │ │
//!                    │  └──────────────────────────────────────────┘ │
//!                    └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use frontend_gateway::config::loader::load_config;
use frontend_gateway::config::GatewayConfig;
use frontend_gateway::lifecycle::{signals, Shutdown};
use frontend_gateway::observability::{logging, metrics};
use frontend_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "frontend-gateway")]
#[command(about = "HTTP front-end for the chatbot backend API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port, overriding the configured bind address.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(port) = cli.port {
        config.set_port(port);
    }

    logging::init(&config.observability);

    tracing::info!("frontend-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend_origin = %config.backend.origin,
        proxy_prefix = %config.backend.prefix,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
