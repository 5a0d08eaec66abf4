//! Module: obs
//! Responsibility: ephemeral in-memory counters for pipeline derivations.
//! Does not own: engine semantics; correctness never depends on counters.
//! Boundary: the session reports stage runs here; consumers read snapshots.

use serde::Serialize;
use std::cell::RefCell;

///
/// StageCounters
///
/// Ephemeral counters for pipeline stage runs and row volumes. Derivations
/// are single-threaded per session, so thread-local state suffices.
///

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StageCounters {
    pub filter_runs: u64,
    pub sort_runs: u64,
    pub page_runs: u64,
    pub aggregate_runs: u64,

    // Row volumes observed by the filter stage
    pub rows_scanned: u64,
    pub rows_matched: u64,
}

thread_local! {
    static STAGE_COUNTERS: RefCell<StageCounters> = RefCell::new(StageCounters::default());
}

fn with_counters_mut<R>(f: impl FnOnce(&mut StageCounters) -> R) -> R {
    STAGE_COUNTERS.with(|counters| f(&mut counters.borrow_mut()))
}

/// Point-in-time copy of the counters.
#[must_use]
pub fn snapshot() -> StageCounters {
    STAGE_COUNTERS.with(|counters| counters.borrow().clone())
}

/// Reset all counters (useful in tests).
pub fn reset() {
    with_counters_mut(|counters| *counters = StageCounters::default());
}

pub(crate) fn record_filter_run(scanned: usize, matched: usize) {
    with_counters_mut(|counters| {
        counters.filter_runs += 1;
        counters.rows_scanned += scanned as u64;
        counters.rows_matched += matched as u64;
    });
}

pub(crate) fn record_sort_run() {
    with_counters_mut(|counters| counters.sort_runs += 1);
}

pub(crate) fn record_page_run() {
    with_counters_mut(|counters| counters.page_runs += 1);
}

pub(crate) fn record_aggregate_run() {
    with_counters_mut(|counters| counters.aggregate_runs += 1);
}
