//! Observability: runtime telemetry (metrics) and sink abstractions.
//!
//! This module does not reach into cursor internals.
//! Cursor state lives in `rowset`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventReport, EventState};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
