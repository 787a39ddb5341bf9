//! Prometheus metrics for the order service.
//!
//! # Example
//!
//! ```ignore
//! use order_service::observability::{init_metrics, record_order_created};
//!
//! let handle = init_metrics()?;
//! record_order_created();
//! let body = handle.render();
//! ```

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder.
///
/// The returned handle renders the current metrics in the Prometheus text
/// format and is served on `/metrics`. Until this is called every `record_*`
/// function is a no-op.
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, MetricsError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!("Prometheus metrics recorder installed");

    Ok(handle)
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to install metrics recorder.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

/// Record a successfully created order.
pub fn record_order_created() {
    counter!("orders_created_total").increment(1);
}

/// Record a successfully replaced order.
pub fn record_order_updated() {
    counter!("orders_updated_total").increment(1);
}

/// Record a successfully deleted order.
pub fn record_order_deleted() {
    counter!("orders_deleted_total").increment(1);
}

/// Record a rejected create/update request.
///
/// # Arguments
///
/// * `field` - The field that failed validation (e.g. "client", "total")
pub fn record_validation_failure(field: &str) {
    counter!(
        "order_validation_failures_total",
        "field" => field.to_string()
    )
    .increment(1);
}

/// Update the orders-in-store gauge.
pub fn update_orders_in_store(count: usize) {
    #[allow(clippy::cast_precision_loss)]
    gauge!("orders_in_store").set(count as f64);
}
