//! Module: view
//! Responsibility: view-state ownership and transition coupling rules.
//! Does not own: pipeline math; it only parameterizes filter, sort, and page.
//! Boundary: the single mutation path for session view-state.

use crate::{
    DEFAULT_PAGE_SIZE,
    filter::{FieldFilter, FilterCriteria},
    sort::{Direction, SortKey},
};

///
/// ViewState
///
/// Session-scoped view parameters. Every transition is total and
/// synchronous; the page-index invariant `1 <= current_page <=
/// max(1, total_pages)` is restored by clamping, never reported as an error.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    sector: FieldFilter,
    hub: FieldFilter,
    search: String,
    sort_key: SortKey,
    direction: Direction,
    current_page: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sector: FieldFilter::All,
            hub: FieldFilter::All,
            search: String::new(),
            sort_key: SortKey::Mw,
            direction: Direction::Desc,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewState {
    /// Default state with a non-default page size (peripheral display knob;
    /// a zero size is floored to 1). Page size never changes mid-session.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn sector(&self) -> &FieldFilter {
        &self.sector
    }

    #[must_use]
    pub const fn hub(&self) -> &FieldFilter {
        &self.hub
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Criteria snapshot consumed by the filter stage.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            sector: self.sector.clone(),
            hub: self.hub.clone(),
            search: self.search.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Filter changes invalidate the previous page position.
    pub fn set_sector(&mut self, sector: FieldFilter) {
        self.sector = sector;
        self.current_page = 1;
    }

    /// Filter changes invalidate the previous page position.
    pub fn set_hub(&mut self, hub: FieldFilter) {
        self.hub = hub;
        self.current_page = 1;
    }

    /// Search changes invalidate the previous page position.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.current_page = 1;
    }

    /// Re-selecting the active key toggles the direction; a new key starts
    /// ascending. Deliberately does NOT reset the page index, unlike the
    /// filter and search transitions; the paginator's empty-window behavior
    /// covers the out-of-range position this can leave behind.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = key;
            self.direction = Direction::Asc;
        }
    }

    /// Clamp into `[1, max(1, total_pages)]` before assigning.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Restore every field (including the page size) to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
