/// Page sizes offered by the table views.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Parse a page-size argument, accepting only the offered options.
pub fn parse_page_size(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
}

/// Parse a signed page argument. Range checks happen later, by clamping.
pub fn parse_signed_page(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Human label for a page-size option, e.g. `20 per page`.
pub fn page_size_label(size: usize) -> String {
    format!("{size} per page")
}
