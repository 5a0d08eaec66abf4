//! Module: sort
//! Responsibility: stable field-keyed ordering over filtered rows.
//! Does not own: predicate evaluation or page slicing.
//! Boundary: second pipeline stage, between filter and paginate.

use crate::record::FacilityRecord;
use derive_more::Display;
use std::{cmp::Ordering, str::FromStr};
use thiserror::Error as ThisError;

///
/// SortKey
///
/// Selectable ordering field. Display/parse spelling matches the record
/// boundary, so the sector key round-trips as `type`.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum SortKey {
    #[display("name")]
    Name,
    #[display("type")]
    Sector,
    #[display("hub")]
    Hub,
    #[display("city")]
    City,
    #[display("county")]
    County,
    #[display("mw")]
    Mw,
}

impl SortKey {
    /// Natural three-way comparison on the keyed field: total-order numeric
    /// for mw, codepoint-lexicographic for text fields (not locale-aware,
    /// not case-insensitive).
    #[must_use]
    pub fn compare(self, left: &FacilityRecord, right: &FacilityRecord) -> Ordering {
        match self {
            Self::Name => left.name.cmp(&right.name),
            Self::Sector => left.sector.cmp(&right.sector),
            Self::Hub => left.hub.cmp(&right.hub),
            Self::City => left.city.cmp(&right.city),
            Self::County => left.county.cmp(&right.county),
            Self::Mw => left.mw.total_cmp(&right.mw),
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Sector),
            "hub" => Ok(Self::Hub),
            "city" => Ok(Self::City),
            "county" => Ok(Self::County),
            "mw" => Ok(Self::Mw),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

#[derive(Debug, ThisError)]
#[error("unknown sort key: {0} (expected name, type, hub, city, county, or mw)")]
pub struct ParseSortKeyError(String);

///
/// Direction
///
/// Desc reverses the comparison result rather than the sorted list, so ties
/// keep original input order under both directions.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Direction {
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

impl Direction {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

#[derive(Debug, ThisError)]
#[error("unknown sort direction: {0} (expected asc or desc)")]
pub struct ParseDirectionError(String);

/// Return a new ordering of `rows`; the input sequence is never mutated.
/// `slice::sort_by` is stable, which the tie-order contract relies on.
#[must_use]
pub fn sort<'a>(
    rows: &[&'a FacilityRecord],
    key: SortKey,
    direction: Direction,
) -> Vec<&'a FacilityRecord> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|left, right| direction.apply(key.compare(left, right)));

    sorted
}
