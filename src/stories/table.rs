//! Mock data for the paged table story.
//!
//! Generates deterministic rows so the table story can show which items sit on
//! the current page alongside the pagination strip.

use crate::calculator::item_range;

/// One row of mock data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// One-based item id.
    pub id: usize,
    pub name: String,
    pub category: String,
    pub status: &'static str,
}

impl TableRow {
    /// Builds the row for zero-based item `i`.
    #[must_use]
    pub fn mock(i: usize) -> Self {
        let status = match i % 3 {
            0 => "Active",
            1 => "Pending",
            _ => "Inactive",
        };
        Self {
            id: i + 1,
            name: format!("Item {}", i + 1),
            category: format!("Category {}", (i % 5) + 1),
            status,
        }
    }
}

/// Rows shown on page `index`.
#[must_use]
pub fn page_rows(index: usize, page_size: usize, total_items: usize) -> Vec<TableRow> {
    let (start, end) = item_range(index, page_size, total_items);
    (start..end).map(TableRow::mock).collect()
}

/// "Showing X to Y of Z items" for page `index`.
///
/// An empty collection reads "Showing 0 to 0 of 0 items".
#[must_use]
pub fn showing_summary(index: usize, page_size: usize, total_items: usize) -> String {
    let (start, end) = item_range(index, page_size, total_items);
    let first = if end > start { start + 1 } else { start };
    format!("Showing {first} to {end} of {total_items} items")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_is_partial() {
        let rows = page_rows(9, 5, 47);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 46);
        assert_eq!(rows[1].name, "Item 47");
    }

    #[test]
    fn mock_rows_cycle_status_and_category() {
        let row = TableRow::mock(4);
        assert_eq!(row.status, "Pending");
        assert_eq!(row.category, "Category 5");
    }

    #[test]
    fn summary_matches_page_bounds() {
        assert_eq!(showing_summary(0, 5, 47), "Showing 1 to 5 of 47 items");
        assert_eq!(showing_summary(9, 5, 47), "Showing 46 to 47 of 47 items");
        assert_eq!(showing_summary(0, 5, 0), "Showing 0 to 0 of 0 items");
    }
}
