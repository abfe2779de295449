//! Pure pagination math and page-window shaping helpers.

use serde::Serialize;

/// Number of pages shown on each side of the current page by default.
pub const DEFAULT_WINDOW_RADIUS: usize = 2;

/// A renderable unit of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageIndicator {
    /// Clickable page number, 1-based.
    Page(usize),
    /// Non-interactive marker for a run of hidden pages.
    Ellipsis,
}

impl PageIndicator {
    /// Page number carried by this indicator, if any.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Clamp a signed page request, so zero and negative input land on page 1.
pub fn clamp_signed_page(page: i64, total_pages: usize) -> usize {
    let page = usize::try_from(page).unwrap_or(1);
    clamp_page(page, total_pages)
}

/// Resolve a jump-entered page using the total-pages hint the user saw.
///
/// The hint can become stale if data changed after the controls were rendered.
/// This function safely bounds the target page to both the current total
/// and the hint range seen by the user.
pub fn resolve_jump_target_page(
    entered_page: i64,
    current_total_pages: usize,
    hinted_total_pages: usize,
) -> usize {
    let max_allowed_page = std::cmp::min(current_total_pages, std::cmp::max(hinted_total_pages, 1));
    clamp_signed_page(entered_page, max_allowed_page)
}

/// Return start/end item indices for a page window.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}

/// Build a bullet-list description string for a specific page window.
pub fn paginated_bulleted_description(items: &[String], per_page: usize, page: usize) -> String {
    let total = total_pages(items.len(), per_page);
    let page = clamp_page(page, total);
    let (start, end) = page_window(items.len(), per_page, page);
    if start == end {
        return String::new();
    }
    format!("- {}", items[start..end].join("\n- "))
}

/// Produce the page buttons and ellipsis markers for a pagination control.
///
/// The first and last page are always present, together with every page
/// within `window_radius` of `current_page`. A single ellipsis stands in for
/// the hidden pages on each side of the window. Very short listings
/// (`total_pages <= window_radius + 3`) list every page, so a window at
/// either end never elides a lone page.
///
/// Out-of-range input is clamped; this never panics.
pub fn page_indicators(
    current_page: usize,
    total_pages: usize,
    window_radius: usize,
) -> Vec<PageIndicator> {
    let total = total_pages.max(1);
    let current = clamp_page(current_page, total);

    let compact_limit = window_radius.saturating_add(3);
    if total <= compact_limit {
        return (1..=total).map(PageIndicator::Page).collect();
    }

    let low = current.saturating_sub(window_radius).max(1);
    let high = current.saturating_add(window_radius).min(total);

    let mut indicators = Vec::with_capacity((high - low).saturating_add(5));
    indicators.push(PageIndicator::Page(1));

    if low > 2 {
        indicators.push(PageIndicator::Ellipsis);
    }

    for page in low.max(2)..=high.min(total - 1) {
        indicators.push(PageIndicator::Page(page));
    }

    if high < total - 1 {
        indicators.push(PageIndicator::Ellipsis);
    }

    indicators.push(PageIndicator::Page(total));
    indicators
}
