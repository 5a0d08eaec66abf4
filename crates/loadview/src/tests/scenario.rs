//! Concrete end-to-end scenarios over the session surface.

use crate::{
    aggregate,
    filter::{self, FieldFilter, FilterCriteria},
    obs,
    session::ViewSession,
    sort::SortKey,
    store::RecordStore,
    test_fixtures::{alpha_beta, sample_fleet},
    view::ViewState,
};

#[test]
fn case_insensitive_city_search_then_aggregate() {
    let records = alpha_beta();

    let criteria = FilterCriteria {
        search: "hou".to_string(),
        ..FilterCriteria::default()
    };
    let rows = filter::filter(&records, &criteria);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Beta");

    let summary = aggregate::aggregate(&rows);
    assert!((summary.total_mw - 150.0).abs() < f64::EPSILON);
    assert_eq!(summary.count, 1);
    assert!((summary.avg_mw - 150.0).abs() < f64::EPSILON);
}

#[test]
fn page_two_of_size_one_holds_the_second_row() {
    let mut session = ViewSession::with_state(
        RecordStore::new(alpha_beta()),
        ViewState::with_page_size(1),
    );

    // Default sort is mw desc: [Alpha, Beta].
    session.goto_page(2);
    let view = session.visible_page();

    assert_eq!(view.total_pages, 2);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].name, "Beta");
}

#[test]
fn search_resets_the_page_but_sort_toggle_does_not() {
    let mut session = ViewSession::with_state(
        RecordStore::new(sample_fleet()),
        ViewState::with_page_size(1),
    );

    session.goto_page(3);
    assert_eq!(session.state().current_page(), 3);

    session.set_search("waco");
    assert_eq!(session.state().current_page(), 1);

    let mut session = ViewSession::with_state(
        RecordStore::new(sample_fleet()),
        ViewState::with_page_size(1),
    );
    session.goto_page(3);
    session.set_sort(SortKey::Mw);
    assert_eq!(session.state().current_page(), 3);
}

#[test]
fn stale_page_after_sort_yields_an_empty_window_not_a_panic() {
    // A state carried over from a larger set: page 3 of a 2-row store.
    let mut state = ViewState::with_page_size(1);
    state.set_page(3, 10);

    let session = ViewSession::with_state(RecordStore::new(alpha_beta()), state);
    let view = session.visible_page();

    assert!(view.items.is_empty());
    assert_eq!(view.page, 3);
    assert_eq!(view.total_pages, 2);
}

#[test]
fn unrecognized_hub_is_reachable_only_through_all() {
    let session = ViewSession::new(RecordStore::new(sample_fleet()));

    // "Panhandle" is outside the fixed display list but present in the data.
    assert!(!crate::ERCOT_HUBS.contains(&"Panhandle"));
    assert!(session.hub_options().contains(&"Panhandle".to_string()));

    let all_rows = session.filtered();
    assert!(all_rows.iter().any(|row| row.hub == "Panhandle"));
}

#[test]
fn hub_rollup_follows_the_active_filter() {
    let mut session = ViewSession::new(RecordStore::new(sample_fleet()));
    session.set_sector(FieldFilter::parse("Steel"));

    let totals = session.hub_totals();

    // Beta (150) and Eta (150) are the only steel rows, both in South.
    assert_eq!(totals.len(), 1);
    assert!((totals["South"] - 300.0).abs() < f64::EPSILON);
}

#[test]
fn stage_counters_track_derivations() {
    obs::reset();

    let session = ViewSession::new(RecordStore::new(sample_fleet()));
    let _ = session.visible_page();
    let _ = session.summary();

    let counters = obs::snapshot();
    assert_eq!(counters.filter_runs, 2);
    assert_eq!(counters.sort_runs, 1);
    assert_eq!(counters.page_runs, 1);
    assert_eq!(counters.aggregate_runs, 1);
    assert_eq!(counters.rows_scanned, 2 * sample_fleet().len() as u64);
}
