//! Module: aggregate
//! Responsibility: summary statistics over the filtered (pre-pagination) set.
//! Does not own: predicate evaluation or ordering; input order is irrelevant
//! to every output here.
//! Boundary: terminal pipeline stage feeding summary displays and rollups.

use crate::record::FacilityRecord;
use serde::Serialize;
use std::collections::BTreeMap;

///
/// LoadSummary
///
/// Aggregates over the filtered set. The average carries an explicit
/// empty-set guard; no NaN or infinity reaches a display surface.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoadSummary {
    pub total_mw: f64,
    pub count: usize,
    pub avg_mw: f64,
    /// Sum of per-record estimated annual energy (load-factor annualized).
    pub est_annual_mwh: f64,
}

/// Summarize the filtered set.
#[must_use]
pub fn aggregate(rows: &[&FacilityRecord]) -> LoadSummary {
    let total_mw: f64 = rows.iter().map(|record| record.mw).sum();
    let est_annual_mwh: f64 = rows.iter().map(|record| record.est_annual_mwh()).sum();
    let count = rows.len();
    let avg_mw = if count == 0 {
        0.0
    } else {
        total_mw / count as f64
    };

    LoadSummary {
        total_mw,
        count,
        avg_mw,
        est_annual_mwh,
    }
}

/// Summed MW grouped by hub label over the same filtered set. A BTreeMap
/// keeps rollup iteration order deterministic.
#[must_use]
pub fn hub_totals(rows: &[&FacilityRecord]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();

    for record in rows {
        *totals.entry(record.hub.clone()).or_insert(0.0) += record.mw;
    }

    totals
}
