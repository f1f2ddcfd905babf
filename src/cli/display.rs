//! Table builder wrapper around comfy-table for consistent display.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};

/// Create a two-column key/value table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn settings_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Render an optional value, showing `-` when absent.
pub fn or_dash(value: Option<&str>) -> String {
    value.map_or_else(|| "-".to_string(), ToString::to_string)
}
