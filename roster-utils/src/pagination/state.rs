//! Page navigation state owned by a paginated listing.

use serde::{Deserialize, Serialize};

use super::page::{PageIndicator, clamp_page, clamp_signed_page, page_indicators};

/// Pagination block reported by a data provider alongside a page of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Page the provider actually served, 1-based. Zero means "not reported".
    #[serde(default)]
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Current position of a paginated listing.
///
/// Always satisfies `1 <= current_page <= total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    current_page: usize,
    total_pages: usize,
    items_per_page: usize,
    total_count: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PaginationState {
    /// Create a state on page 1 of a single-page listing.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            items_per_page: items_per_page.max(1),
            total_count: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Move to `page`, clamped into `[1, total_pages]`. Returns the new page.
    pub fn go_to_page(&mut self, page: i64) -> usize {
        self.current_page = clamp_signed_page(page, self.total_pages);
        self.current_page
    }

    /// Step back one page, staying on page 1 at the start.
    pub fn previous_page(&mut self) -> usize {
        self.current_page = clamp_page(self.current_page.saturating_sub(1), self.total_pages);
        self.current_page
    }

    /// Step forward one page, staying on the last page at the end.
    pub fn next_page(&mut self) -> usize {
        self.current_page = clamp_page(self.current_page.saturating_add(1), self.total_pages);
        self.current_page
    }

    /// Switch to a new page size and go back to page 1.
    pub fn change_page_size(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    /// Adopt the totals (and served page, when reported) from a provider response.
    pub fn apply_meta(&mut self, meta: PaginationMeta) {
        self.total_pages = meta.total_pages.max(1);
        self.total_count = meta.total_count;
        if meta.current_page >= 1 {
            self.current_page = meta.current_page;
        }
        self.current_page = clamp_page(self.current_page, self.total_pages);
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Navigation controls are only worth rendering for multi-page listings.
    pub fn should_render_controls(&self) -> bool {
        self.total_pages > 1
    }

    /// 1-based `(first, last)` item numbers shown on the current page.
    ///
    /// Returns `(0, 0)` for an empty listing.
    pub fn item_range(&self) -> (usize, usize) {
        if self.total_count == 0 {
            return (0, 0);
        }
        let first = (self.current_page - 1)
            .saturating_mul(self.items_per_page)
            .saturating_add(1);
        let last = self
            .current_page
            .saturating_mul(self.items_per_page)
            .min(self.total_count);
        (first.min(self.total_count), last)
    }

    /// Page indicators for the current position.
    pub fn indicators(&self, window_radius: usize) -> Vec<PageIndicator> {
        page_indicators(self.current_page, self.total_pages, window_radius)
    }
}
