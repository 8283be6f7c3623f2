//! Frontend Gateway Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
