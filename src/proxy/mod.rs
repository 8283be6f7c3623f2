//! Forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (method, path, query, body)
//!     → method.rs (map onto the supported method set)
//!     → upstream.rs (build target URL, issue outbound request)
//!     → Return: buffered backend response or ProxyError
//!
//! The HTTP boundary (http/response.rs) collapses every ProxyError into
//! the single externally visible 503 payload.
//! ```
//!
//! # Design Decisions
//! - Single fixed backend origin, configured at construction
//! - Forwarding is synchronous per request: one in, at most one out
//! - No retries, no caching, no header rewriting on the response path

pub mod error;
pub mod method;
pub mod upstream;

pub use error::ProxyError;
pub use method::ProxyMethod;
pub use upstream::{UpstreamClient, UpstreamResponse};
