//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the backend origin is a usable http(s) URL
//! - Validate value ranges (timeouts > 0, addresses parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "backend.origin").
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn error(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(error(
            "listener.bind_address",
            format!("not a socket address: {:?}", config.listener.bind_address),
        ));
    }

    match Url::parse(&config.backend.origin) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(error(
                    "backend.origin",
                    format!("scheme must be http or https, got {:?}", url.scheme()),
                ));
            }
            if url.host_str().is_none() {
                errors.push(error("backend.origin", "missing host"));
            }
            if url.path() != "/" && !url.path().is_empty() {
                errors.push(error(
                    "backend.origin",
                    "must be scheme + host only, without a path",
                ));
            }
            if url.query().is_some() || url.fragment().is_some() {
                errors.push(error(
                    "backend.origin",
                    "must not carry a query or fragment",
                ));
            }
        }
        Err(e) => {
            errors.push(error("backend.origin", format!("not a URL: {}", e)));
        }
    }

    if !config.backend.prefix.starts_with('/') || config.backend.prefix.len() < 2 {
        errors.push(error(
            "backend.prefix",
            "must start with '/' and name at least one segment",
        ));
    } else if config.backend.prefix.ends_with('/') {
        errors.push(error("backend.prefix", "must not end with '/'"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(error("timeouts.request_secs", "must be greater than zero"));
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(error("timeouts.connect_secs", "must be greater than zero"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(error(
            "observability.metrics_address",
            format!(
                "not a socket address: {:?}",
                config.observability.metrics_address
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
