//! Infrastructure Layer
//!
//! Observability around the transport seams:
//! - Prometheus metrics
//! - The instrumented transport decorator

pub mod instrumented;
pub mod metrics;

pub use instrumented::Instrumented;
