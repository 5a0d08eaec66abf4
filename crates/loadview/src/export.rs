//! Module: export
//! Responsibility: delimited serialization of the filtered record sequence.
//! Does not own: filtering; callers hand in the pre-pagination set.
//! Boundary: the download/export sink surface.

use crate::{error::ExportError, record::FacilityRecord};
use std::{borrow::Cow, io::Write};

/// Column order matches the record schema; the sector column keeps its
/// boundary spelling `type`.
const HEADER: &str = "name,type,hub,city,county,mw,notes";

/// Write the rows as CSV with RFC 4180 quoting. Absent notes serialize as an
/// empty field, never a literal placeholder.
pub fn write_csv<W: Write>(rows: &[&FacilityRecord], mut writer: W) -> Result<(), ExportError> {
    writeln!(writer, "{HEADER}")?;

    for record in rows {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            quoted(&record.name),
            quoted(&record.sector),
            quoted(&record.hub),
            quoted(&record.city),
            quoted(&record.county),
            record.mw,
            quoted(record.notes.as_deref().unwrap_or_default()),
        )?;
    }

    Ok(())
}

// Quote only when the field needs it: embedded delimiter, quote, or newline.
fn quoted(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
