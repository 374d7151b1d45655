//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{
    API_ERRORS_TOTAL, DOCUMENTS_GENERATED_TOTAL, STORE_OPERATIONS_TOTAL, STORE_OPERATION_LATENCY,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording store metrics
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record a completed store operation
    pub fn record(operation: &str, success: bool, elapsed: Duration) {
        let outcome = if success { "ok" } else { "error" };
        STORE_OPERATIONS_TOTAL
            .with_label_values(&[operation, outcome])
            .inc();
        STORE_OPERATION_LATENCY
            .with_label_values(&[operation])
            .observe(elapsed.as_secs_f64());
    }
}

/// Helper struct for recording error responses
pub struct ErrorMetrics;

impl ErrorMetrics {
    pub fn record_validation() {
        API_ERRORS_TOTAL.with_label_values(&["validation"]).inc();
    }

    pub fn record_operation() {
        API_ERRORS_TOTAL.with_label_values(&["operation"]).inc();
    }
}

/// Helper struct for document metrics
pub struct DocumentMetrics;

impl DocumentMetrics {
    pub fn record_generated() {
        DOCUMENTS_GENERATED_TOTAL.inc();
    }
}
