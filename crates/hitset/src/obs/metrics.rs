use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// Metrics
/// Ephemeral, in-memory counters for cursor lifecycle operations.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventState {
    // Cursor lifecycle
    pub rowsets_built: u64,
    pub rows_advanced: u64,
    pub columns_read: u64,
    pub resets: u64,

    // Page handoff
    pub pages_continued: u64,
    pub pages_terminal: u64,

    // Construction validation
    pub rejected_configs: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    with_state_mut(|m| *m = EventState::default());
}

/// Reset all event state.
pub(crate) fn reset_all() {
    reset();
}

///
/// EventReport
/// Point-in-time counter snapshot with derived ratios.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    /// Ephemeral runtime counters.
    pub counters: EventState,
    /// Rows actually produced per built row set.
    pub avg_rows_per_rowset: f64,
}

/// Build a metrics report by inspecting in-memory counters only.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn report() -> EventReport {
    let snap = with_state(Clone::clone);

    let avg_rows_per_rowset = if snap.rowsets_built > 0 {
        snap.rows_advanced as f64 / snap.rowsets_built as f64
    } else {
        0.0
    };

    EventReport {
        counters: snap,
        avg_rows_per_rowset,
    }
}

///
/// TESTS
///

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn reset_all_clears_state() {
        with_state_mut(|m| {
            m.rowsets_built = 3;
            m.rows_advanced = 12;
            m.pages_continued = 2;
        });

        reset_all();

        with_state(|m| {
            assert_eq!(m.rowsets_built, 0);
            assert_eq!(m.rows_advanced, 0);
            assert_eq!(m.pages_continued, 0);
        });
    }

    #[test]
    fn report_averages_rows_over_built_rowsets() {
        reset_all();
        with_state_mut(|m| {
            m.rowsets_built = 2;
            m.rows_advanced = 7;
        });

        let report = report();
        assert_eq!(report.counters.rowsets_built, 2);
        assert_eq!(report.avg_rows_per_rowset, 3.5);
    }

    #[test]
    fn report_without_rowsets_reports_zero_average() {
        reset_all();

        let report = report();
        assert_eq!(report.avg_rows_per_rowset, 0.0);
    }
}
