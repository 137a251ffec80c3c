//! Metrics sink boundary.
//!
//! Core cursor logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! This module is the only allowed bridge between cursor logic
//! and the global metrics state.
use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    RowSetBuilt,
    RowAdvanced,
    ColumnRead,
    RowSetReset,
    PageContinued,
    PageTerminal,
    ConfigRejected,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink backing the thread-local counters; events route here
/// whenever no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::RowSetBuilt => {
                m.rowsets_built = m.rowsets_built.saturating_add(1);
            }
            MetricsEvent::RowAdvanced => {
                m.rows_advanced = m.rows_advanced.saturating_add(1);
            }
            MetricsEvent::ColumnRead => {
                m.columns_read = m.columns_read.saturating_add(1);
            }
            MetricsEvent::RowSetReset => {
                m.resets = m.resets.saturating_add(1);
            }
            MetricsEvent::PageContinued => {
                m.pages_continued = m.pages_continued.saturating_add(1);
            }
            MetricsEvent::PageTerminal => {
                m.pages_terminal = m.pages_terminal.saturating_add(1);
            }
            MetricsEvent::ConfigRejected => {
                m.rejected_configs = m.rejected_configs.saturating_add(1);
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    if let Some(sink) = override_sink {
        sink.record(event);
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current metrics state for endpoint/test plumbing.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous override is restored on all exits, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0.take();
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::Cell,
        panic::{AssertUnwindSafe, catch_unwind},
    };

    struct CountingSink {
        calls: Cell<usize>,
    }

    impl CountingSink {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                calls: Cell::new(0),
            })
        }
    }

    impl MetricsSink for CountingSink {
        fn record(&self, _: MetricsEvent) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn scoped_override_shadows_and_unwinds_in_nesting_order() {
        SINK_OVERRIDE.with(|cell| {
            cell.borrow_mut().take();
        });
        metrics_reset_all();

        let outer = CountingSink::new();
        let inner = CountingSink::new();

        with_metrics_sink(outer.clone(), || {
            record(MetricsEvent::RowAdvanced);

            with_metrics_sink(inner.clone(), || {
                record(MetricsEvent::ColumnRead);
                record(MetricsEvent::ColumnRead);
            });

            record(MetricsEvent::RowSetReset);
        });

        assert_eq!(outer.calls.get(), 2, "outer sink sees only its own scope");
        assert_eq!(inner.calls.get(), 2);

        // Every scope closed: events land in the global counters again.
        record(MetricsEvent::RowSetBuilt);
        assert_eq!(outer.calls.get(), 2);
        assert_eq!(metrics_report().counters.rowsets_built, 1);
    }

    #[test]
    fn override_is_removed_after_a_panicking_scope() {
        SINK_OVERRIDE.with(|cell| {
            cell.borrow_mut().take();
        });
        metrics_reset_all();

        let sink = CountingSink::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            with_metrics_sink(sink.clone(), || {
                record(MetricsEvent::RowAdvanced);
                panic!("scope body failed");
            });
        }));
        assert!(result.is_err());
        assert_eq!(sink.calls.get(), 1);

        record(MetricsEvent::RowAdvanced);
        assert_eq!(
            sink.calls.get(),
            1,
            "events after the scope bypass the sink"
        );
        assert_eq!(metrics_report().counters.rows_advanced, 1);
    }

    #[test]
    fn global_sink_increments_matching_counters() {
        metrics_reset_all();

        record(MetricsEvent::RowSetBuilt);
        record(MetricsEvent::RowAdvanced);
        record(MetricsEvent::RowAdvanced);
        record(MetricsEvent::ColumnRead);
        record(MetricsEvent::RowSetReset);
        record(MetricsEvent::PageContinued);
        record(MetricsEvent::PageTerminal);
        record(MetricsEvent::ConfigRejected);

        let counters = metrics_report().counters;
        assert_eq!(counters.rowsets_built, 1);
        assert_eq!(counters.rows_advanced, 2);
        assert_eq!(counters.columns_read, 1);
        assert_eq!(counters.resets, 1);
        assert_eq!(counters.pages_continued, 1);
        assert_eq!(counters.pages_terminal, 1);
        assert_eq!(counters.rejected_configs, 1);
    }
}
