//! Observability module for metrics and logging.

mod metrics;
mod tracing;

pub use self::metrics::{
    MetricsError, init_metrics, record_order_created, record_order_deleted, record_order_updated,
    record_validation_failure, update_orders_in_store,
};
pub use self::tracing::{TracingError, build_filter, init_tracing};
