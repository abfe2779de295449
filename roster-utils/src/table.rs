use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

/// Render rows under a bold header as a bordered text table.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|header| Cell::new(header).add_attribute(Attribute::Bold)),
        );

    for row in rows {
        table.add_row(row.iter().map(Cell::new));
    }

    table.to_string()
}

/// Render a single full-width message row, used for loading and empty states.
pub fn render_notice_table(headers: &[&str], notice: &str) -> String {
    let mut row = vec![notice.to_owned()];
    row.resize(headers.len().max(1), String::new());
    render_table(headers, &[row])
}
