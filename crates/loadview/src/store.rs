//! Module: store
//! Responsibility: immutable facility record collection and its one-shot load.
//! Does not own: filtering, ordering, pagination, or aggregation.
//! Boundary: the only surface that touches the external JSON record source.

use crate::{error::LoadError, record::FacilityRecord};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

///
/// RecordStore
///
/// Session-lifetime record collection. Populated once at startup and
/// read-only afterwards; no mutating accessor exists.
///

#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<FacilityRecord>,
}

impl RecordStore {
    /// Wrap an already-decoded record collection (embedding, tests).
    #[must_use]
    pub const fn new(records: Vec<FacilityRecord>) -> Self {
        Self { records }
    }

    /// Decode a JSON array of facility records from a reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, LoadError> {
        let records = serde_json::from_reader(reader)?;

        Ok(Self { records })
    }

    /// Decode a JSON array of facility records from a file path.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;

        Self::from_json_reader(BufReader::new(file))
    }

    /// Borrow the full record sequence in load order.
    #[must_use]
    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
