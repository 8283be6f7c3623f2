//! Supported proxy methods.
//!
//! # Design Decisions
//! - Closed enumeration over the five forwarded methods; everything else
//!   is rejected at the routing layer and never reaches the backend
//! - One explicit branch per variant, no dispatch on raw method strings
//! - Each variant knows whether it conventionally carries a JSON body

use axum::http::Method;

/// The HTTP methods the gateway forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl ProxyMethod {
    /// Map an inbound method onto the supported set.
    ///
    /// Returns `None` for anything outside the five forwarded methods.
    pub fn from_http(method: &Method) -> Option<Self> {
        match *method {
            Method::GET => Some(ProxyMethod::Get),
            Method::POST => Some(ProxyMethod::Post),
            Method::PUT => Some(ProxyMethod::Put),
            Method::DELETE => Some(ProxyMethod::Delete),
            Method::PATCH => Some(ProxyMethod::Patch),
            _ => None,
        }
    }

    /// True if this method forwards a JSON request body.
    pub fn carries_body(self) -> bool {
        match self {
            ProxyMethod::Post | ProxyMethod::Put | ProxyMethod::Patch => true,
            ProxyMethod::Get | ProxyMethod::Delete => false,
        }
    }

    /// Canonical name, used as a log field and metric label.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyMethod::Get => "GET",
            ProxyMethod::Post => "POST",
            ProxyMethod::Put => "PUT",
            ProxyMethod::Delete => "DELETE",
            ProxyMethod::Patch => "PATCH",
        }
    }
}
