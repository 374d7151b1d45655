//! Prometheus metrics for the collaboration API.
//!
//! - Store operation counts and latency by operation and outcome
//! - API error counts by kind
//! - Generated documents

mod helpers;

pub use helpers::{encode_metrics, DocumentMetrics, ErrorMetrics, StoreMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, HistogramVec,
    IntCounter, IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "collab";

lazy_static! {
    // ============================================================================
    // Store Metrics
    // ============================================================================

    /// Store operations by operation name and outcome (ok / error)
    pub static ref STORE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_store_operations_total", METRIC_PREFIX),
        "Total data-access operations",
        &["operation", "outcome"]
    ).unwrap();

    /// Store operation latency
    pub static ref STORE_OPERATION_LATENCY: HistogramVec = register_histogram_vec!(
        format!("{}_store_operation_latency_seconds", METRIC_PREFIX),
        "Data-access operation latency in seconds",
        &["operation"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    ).unwrap();

    // ============================================================================
    // API Metrics
    // ============================================================================

    /// Error responses by kind (validation / operation)
    pub static ref API_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_api_errors_total", METRIC_PREFIX),
        "Total error responses",
        &["kind"]
    ).unwrap();

    /// NDA documents generated
    pub static ref DOCUMENTS_GENERATED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_documents_generated_total", METRIC_PREFIX),
        "Total NDA documents generated"
    ).unwrap();
}
