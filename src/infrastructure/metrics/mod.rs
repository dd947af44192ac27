//! Prometheus Metrics Module
//!
//! Provides process-wide metrics for Bot API calls.
//!
//! # Metrics Collected
//! - Call counts by operation and outcome
//! - Call latency histograms by operation
//! - Retry-after hints received, by operation

use once_cell::sync::Lazy;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Call counter - tracks calls by operation and outcome
pub static API_CALLS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("api_calls_total", "Total number of Bot API calls").namespace("botgram"),
        &["method", "outcome"], // "ok", "error"
    )
    .expect("Failed to create API_CALLS_TOTAL metric")
});

/// Call latency histogram - tracks call duration in seconds
pub static API_CALL_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let buckets = vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0];
    HistogramVec::new(
        HistogramOpts::new("api_call_duration_seconds", "Bot API call latency in seconds")
            .namespace("botgram")
            .buckets(buckets),
        &["method"],
    )
    .expect("Failed to create API_CALL_DURATION_SECONDS metric")
});

/// Flood-control hints received
pub static API_RETRY_HINTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("api_retry_hints_total", "Failures carrying a retry-after hint")
            .namespace("botgram"),
        &["method"],
    )
    .expect("Failed to create API_RETRY_HINTS_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(API_CALLS_TOTAL.clone()))
        .expect("Failed to register API_CALLS_TOTAL");
    registry
        .register(Box::new(API_CALL_DURATION_SECONDS.clone()))
        .expect("Failed to register API_CALL_DURATION_SECONDS");
    registry
        .register(Box::new(API_RETRY_HINTS_TOTAL.clone()))
        .expect("Failed to register API_RETRY_HINTS_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Outcome label of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Ok,
    /// The remote side answered with a failure.
    Error,
}

impl CallOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Helper to record call metrics
pub fn record_api_call(method: &str, outcome: CallOutcome, duration_secs: f64) {
    API_CALLS_TOTAL
        .with_label_values(&[method, outcome.as_str()])
        .inc();
    API_CALL_DURATION_SECONDS
        .with_label_values(&[method])
        .observe(duration_secs);
}

/// Helper to record a retry-after hint
pub fn record_retry_hint(method: &str) {
    API_RETRY_HINTS_TOTAL.with_label_values(&[method]).inc();
}
