//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! blockchain/, contracts/, registry.rs produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//! ```

pub mod logging;
pub mod metrics;
