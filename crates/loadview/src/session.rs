//! Module: session
//! Responsibility: bind one record store to one view-state and re-derive the
//! visible page and summary views on demand.
//! Does not own: stage math; every derivation delegates to its pipeline
//! module. No memoization — each call recomputes from the current
//! `(RecordStore, ViewState)` pair.
//! Boundary: the consumer-facing API surface of the engine.

use crate::{
    aggregate::{self, LoadSummary},
    error::ExportError,
    export,
    filter::{self, FieldFilter},
    obs,
    page::{self, PageView},
    record::FacilityRecord,
    sort::{self, SortKey},
    store::RecordStore,
    view::ViewState,
};
use std::{
    collections::{BTreeMap, BTreeSet},
    io::Write,
};

///
/// ViewSession
///
/// One browsing session over an immutable record store. All view-state
/// mutation flows through the transition methods; all reads are pure
/// derivations of the current state.
///

#[derive(Clone, Debug)]
pub struct ViewSession {
    store: RecordStore,
    state: ViewState,
}

impl ViewSession {
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            state: ViewState::default(),
        }
    }

    /// Open a session with a pre-built view-state (CLI flags, embedding).
    #[must_use]
    pub const fn with_state(store: RecordStore, state: ViewState) -> Self {
        Self { store, state }
    }

    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    // ------------------------------------------------------------------
    // Transitions (coupling rules live in ViewState)
    // ------------------------------------------------------------------

    pub fn set_sector(&mut self, sector: FieldFilter) {
        self.state.set_sector(sector);
    }

    pub fn set_hub(&mut self, hub: FieldFilter) {
        self.state.set_hub(hub);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.set_search(search);
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.state.set_sort(key);
    }

    /// Clamp against the page count of the *current* filtered set.
    pub fn goto_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.state.set_page(page, total);
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.state.current_page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.goto_page(self.state.current_page().saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    // ------------------------------------------------------------------
    // Derivations (pure; recomputed on every call)
    // ------------------------------------------------------------------

    /// The filtered set: order-preserving, pre-sort, pre-pagination.
    #[must_use]
    pub fn filtered(&self) -> Vec<&FacilityRecord> {
        let rows = filter::filter(self.store.records(), &self.state.criteria());
        obs::record_filter_run(self.store.len(), rows.len());

        rows
    }

    /// Filter → sort → paginate: the exact visible subset plus page count.
    #[must_use]
    pub fn visible_page(&self) -> PageView<'_> {
        let rows = self.filtered();
        let sorted = sort::sort(&rows, self.state.sort_key(), self.state.direction());
        obs::record_sort_run();

        let view = page::paginate(&sorted, self.state.current_page(), self.state.page_size());
        obs::record_page_run();

        view
    }

    /// Aggregates over the filtered set, independent of sort and page.
    #[must_use]
    pub fn summary(&self) -> LoadSummary {
        let rows = self.filtered();
        obs::record_aggregate_run();

        aggregate::aggregate(&rows)
    }

    /// Per-hub MW rollup over the filtered set.
    #[must_use]
    pub fn hub_totals(&self) -> BTreeMap<String, f64> {
        aggregate::hub_totals(&self.filtered())
    }

    /// Computed page count of the current filtered set (0 when empty; the
    /// display floor of 1 is applied only when clamping a page index).
    #[must_use]
    pub fn total_pages(&self) -> usize {
        page::total_pages(self.filtered().len(), self.state.page_size())
    }

    // ------------------------------------------------------------------
    // Filter options for consuming surfaces
    // ------------------------------------------------------------------

    /// Sorted distinct sector labels occurring in the data, fronted by the
    /// `"All"` sentinel.
    #[must_use]
    pub fn sector_options(&self) -> Vec<String> {
        Self::options(self.store.records().iter().map(|r| r.sector.as_str()))
    }

    /// Sorted distinct hub labels occurring in the data, fronted by the
    /// `"All"` sentinel. Unlike [`crate::ERCOT_HUBS`], this reflects what the
    /// data actually carries.
    #[must_use]
    pub fn hub_options(&self) -> Vec<String> {
        Self::options(self.store.records().iter().map(|r| r.hub.as_str()))
    }

    fn options<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let distinct: BTreeSet<&str> = values.collect();

        let mut options = Vec::with_capacity(distinct.len() + 1);
        options.push(crate::ALL_SENTINEL.to_string());
        options.extend(distinct.into_iter().map(str::to_string));

        options
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Serialize the current filtered (pre-pagination) set to the sink.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        export::write_csv(&self.filtered(), writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::sample_fleet;

    fn session() -> ViewSession {
        ViewSession::new(RecordStore::new(sample_fleet()))
    }

    #[test]
    fn default_view_sorts_mw_descending() {
        let session = session();
        let view = session.visible_page();

        let mws: Vec<f64> = view.items.iter().map(|r| r.mw).collect();
        let mut expected = mws.clone();
        expected.sort_by(|a, b| b.total_cmp(a));

        assert_eq!(mws, expected);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn summary_ignores_sort_and_page() {
        let mut session = session();
        let before = session.summary();

        session.set_sort(SortKey::Name);
        session.goto_page(2);

        assert_eq!(session.summary(), before);
    }

    #[test]
    fn goto_page_clamps_against_the_filtered_set() {
        let mut session = ViewSession::with_state(
            RecordStore::new(sample_fleet()),
            ViewState::with_page_size(2),
        );

        session.goto_page(99);
        let total = session.total_pages();

        assert_eq!(session.state().current_page(), total);
    }

    #[test]
    fn next_and_prev_stay_in_bounds() {
        let mut session = ViewSession::with_state(
            RecordStore::new(sample_fleet()),
            ViewState::with_page_size(2),
        );

        session.prev_page();
        assert_eq!(session.state().current_page(), 1);

        let total = session.total_pages();
        for _ in 0..total + 3 {
            session.next_page();
        }
        assert_eq!(session.state().current_page(), total);
    }

    #[test]
    fn option_lists_are_distinct_sorted_and_fronted_by_all() {
        let session = session();

        let hubs = session.hub_options();
        assert_eq!(hubs[0], "All");
        let data_hubs = &hubs[1..];
        let mut sorted = data_hubs.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(data_hubs, sorted.as_slice());

        let sectors = session.sector_options();
        assert_eq!(sectors[0], "All");
        assert!(sectors.len() > 1);
    }

    #[test]
    fn export_writes_the_filtered_set() {
        let mut session = session();
        session.set_hub(FieldFilter::parse("South"));

        let mut out = Vec::new();
        session.export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let rows = session.filtered();
        // header + one line per filtered row
        assert_eq!(text.lines().count(), rows.len() + 1);
    }
}
