//! Module: error
//! Responsibility: boundary error types for record loading and CSV export.
//! Does not own: engine semantics; every pipeline operation is total.
//! Boundary: the record source and the export sink are the only fallible
//! surfaces in the crate.

use thiserror::Error as ThisError;

///
/// LoadError
///
/// One-shot record source failure. The store stays empty on failure; there
/// is no retry and no partial load.
///

#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("record source read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("record source is not a well-formed facility array: {0}")]
    Json(#[from] serde_json::Error),
}

///
/// ExportError
///
/// Export sink failure while serializing the filtered set.
///

#[derive(Debug, ThisError)]
pub enum ExportError {
    #[error("export sink write failed: {0}")]
    Io(#[from] std::io::Error),
}
