//! Deterministic data-view engine for browsing ERCOT large-load facility
//! records: a pure filter → sort → paginate pipeline for the visible page,
//! filter → aggregate for summary statistics, and an explicit view-state
//! value owning the coupling rules between transitions.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod filter;
pub mod obs;
pub mod page;
pub mod record;
pub mod session;
pub mod sort;
pub mod store;
pub mod view;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;
#[cfg(test)]
mod tests;

///
/// CONSTANTS
///

/// Rows shown per page unless the consumer overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Selection value that disables a field filter. The consuming surface
/// round-trips this sentinel; [`filter::FieldFilter::parse`] maps it to the
/// all-pass arm so predicates never string-compare it.
pub const ALL_SENTINEL: &str = "All";

/// Fixed hub display list supplied to consuming surfaces, independent of
/// the hub values that actually occur in the data. A record carrying an
/// unrecognized hub is reachable only through the `"All"` selection.
pub const ERCOT_HUBS: [&str; 5] = ["All", "North", "South", "West", "Houston"];

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or counters are re-exported here.
///

pub mod prelude {
    pub use crate::{
        aggregate::LoadSummary,
        filter::{FieldFilter, FilterCriteria},
        page::PageView,
        record::FacilityRecord,
        session::ViewSession,
        sort::{Direction, SortKey},
        store::RecordStore,
        view::ViewState,
    };
}
