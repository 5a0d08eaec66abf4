//! Module: filter
//! Responsibility: composable row predicate (sector, hub, free-text search).
//! Does not own: ordering, pagination, or aggregate math.
//! Boundary: first pipeline stage; consumes the store, feeds sort and
//! aggregate.

use crate::record::FacilityRecord;

///
/// FieldFilter
///
/// Exact-match selection with an explicit all-pass arm. The consuming
/// surface's `"All"` option is parsed here once so predicate evaluation
/// never string-compares the sentinel.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum FieldFilter {
    #[default]
    All,
    Exact(String),
}

impl FieldFilter {
    /// Parse a raw selection, mapping the `"All"` sentinel to the all-pass
    /// arm. Any other value is an exact match, including values outside the
    /// fixed display lists.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == crate::ALL_SENTINEL {
            Self::All
        } else {
            Self::Exact(raw.to_string())
        }
    }

    fn accepts(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(want) => value == want,
        }
    }
}

///
/// FilterCriteria
///
/// All three arms must hold for a row to pass. The default criteria pass
/// every row.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterCriteria {
    pub sector: FieldFilter,
    pub hub: FieldFilter,
    pub search: String,
}

impl FilterCriteria {
    /// True when the criteria cannot exclude any row.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.sector == FieldFilter::All && self.hub == FieldFilter::All && self.search.is_empty()
    }

    fn matches(&self, record: &FacilityRecord) -> bool {
        self.sector.accepts(&record.sector)
            && self.hub.accepts(&record.hub)
            && self.search_matches(record)
    }

    // Search spans name, city, county, and notes when present; never sector,
    // hub, or mw. Plain lowercasing, no locale-aware folding.
    fn search_matches(&self, record: &FacilityRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let term = self.search.to_lowercase();

        record.name.to_lowercase().contains(&term)
            || record.city.to_lowercase().contains(&term)
            || record.county.to_lowercase().contains(&term)
            || record
                .notes
                .as_deref()
                .is_some_and(|notes| notes.to_lowercase().contains(&term))
    }
}

/// Apply the criteria, preserving input order. Order preservation is an
/// invariant the sort stage's stability contract builds on.
#[must_use]
pub fn filter<'a>(
    records: &'a [FacilityRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a FacilityRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
