//! Module: page
//! Responsibility: fixed-size window slicing and page-count arithmetic.
//! Does not own: page-index ownership rules; clamping lives in `view`.
//! Boundary: last pipeline stage; consumes the sorted, filtered sequence.

use crate::record::FacilityRecord;

///
/// PageView
///
/// One visible window over the sorted, filtered sequence. `total_pages` is
/// the computed value and is 0 for an empty input; the display-facing floor
/// of 1 is applied by the view-state controller, never here, so the
/// coverage arithmetic stays exact.
///

#[derive(Clone, Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a FacilityRecord>,
    /// 1-based page index this window was sliced for.
    pub page: usize,
    pub total_pages: usize,
}

/// Number of pages needed to show `len` rows at `page_size` rows per page.
/// A zero page size is degenerate but total: zero pages.
#[must_use]
pub const fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// Slice the window for a 1-based `page`, clipped to bounds. A page index
/// beyond the end yields an empty window rather than an error; the
/// view-state controller normally resets the index before that happens, but
/// must never have to for safety.
#[must_use]
pub fn paginate<'a>(
    rows: &[&'a FacilityRecord],
    page: usize,
    page_size: usize,
) -> PageView<'a> {
    let total = total_pages(rows.len(), page_size);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());

    PageView {
        items: rows[start..end].to_vec(),
        page,
        total_pages: total,
    }
}
