//! Table component renderer for the paged table story.
//!
//! Renders a fixed-width four-column table (ID, NAME, CATEGORY, STATUS) for the
//! rows on the current page, followed by the caller's pagination strip.

use crate::stories::table::TableRow;
use crate::ui::style::Style;

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 12;

/// Renders the column headers.
pub fn render_table_headers(style: Style) -> String {
    let header = format!(
        "{:<ID_WIDTH$} {:<NAME_WIDTH$} {:<CATEGORY_WIDTH$} {}",
        "ID", "NAME", "CATEGORY", "STATUS"
    );
    style.strong(&header)
}

/// Renders one line per row.
pub fn render_table_rows(rows: &[TableRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            format!(
                "{:<ID_WIDTH$} {:<NAME_WIDTH$} {:<CATEGORY_WIDTH$} {}",
                row.id, row.name, row.category, row.status
            )
        })
        .collect()
}
