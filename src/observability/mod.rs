//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, JSON when configured)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging; request ID flows through every log line
//! - Metrics are cheap (atomic increments)
//! - The external error contract stays uniform; cause-level detail lives
//!   only in logs and metric labels

pub mod logging;
pub mod metrics;
