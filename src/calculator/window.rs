//! Pure page-window math.
//!
//! Everything here is integer arithmetic over already-validated inputs; callers in
//! [`super`] handle validation and policy.

use crate::domain::{NavItem, PaginationError, Result};

/// Lays out the navigation strip for a valid `index < total`.
///
/// `window_size` is the number of numeric tokens the strip aims for: both
/// anchors plus `window_size - 2` interior pages centered on `index`. The window
/// slides inward at the edges instead of shrinking. A gap that would hide a
/// single page is replaced by that page.
///
/// Requires `window_size >= 3` and `index < total`.
pub fn strip_items(index: usize, total: usize, window_size: usize) -> Vec<NavItem> {
    if total <= window_size {
        return (0..total).map(NavItem::Page).collect();
    }

    let last = total - 1;
    let inner = window_size - 2;
    let before = (inner - 1) / 2;

    // total > window_size, so max_start >= 2 and the clamp range is non-empty.
    let max_start = last - inner;
    let start = index.saturating_sub(before).clamp(1, max_start);
    let end = start + inner - 1;

    let mut items = Vec::with_capacity(window_size + 2);
    items.push(NavItem::Page(0));
    push_hidden(&mut items, 1, start);
    items.extend((start..=end).map(NavItem::Page));
    push_hidden(&mut items, end + 1, last);
    items.push(NavItem::Page(last));
    items
}

/// Emits the token for the hidden run `[from, to)` between an anchor and the window.
fn push_hidden(items: &mut Vec<NavItem>, from: usize, to: usize) {
    match to.saturating_sub(from) {
        0 => {}
        1 => items.push(NavItem::Page(from)),
        _ => items.push(NavItem::Gap),
    }
}

/// Computes the number of pages for a collection.
///
/// An empty collection still has one (empty) page.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidConfiguration`] when `page_size` is zero.
///
/// # Examples
///
/// ```
/// use simple_ui_pagination::calculator::total_pages;
///
/// assert_eq!(total_pages(47, 5).unwrap(), 10);
/// assert_eq!(total_pages(0, 5).unwrap(), 1);
/// ```
pub fn total_pages(item_count: usize, page_size: usize) -> Result<usize> {
    if page_size < 1 {
        return Err(PaginationError::InvalidConfiguration(
            "page_size must be at least 1, got 0".to_string(),
        ));
    }
    Ok(item_count.div_ceil(page_size).max(1))
}

/// Returns the half-open item range `[start, end)` shown on page `index`.
///
/// Both bounds are clamped to `item_count`, so a page past the end yields an
/// empty range at the end of the collection.
#[must_use]
pub fn item_range(index: usize, page_size: usize, item_count: usize) -> (usize, usize) {
    let start = index.saturating_mul(page_size).min(item_count);
    let end = start.saturating_add(page_size).min(item_count);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use NavItem::{Gap, Page};

    #[test]
    fn short_collections_show_every_page() {
        assert_eq!(strip_items(2, 5, 5), vec![Page(0), Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(strip_items(0, 1, 7), vec![Page(0)]);
    }

    #[test]
    fn first_page_has_trailing_gap_only() {
        assert_eq!(
            strip_items(0, 10, 5),
            vec![Page(0), Page(1), Page(2), Page(3), Gap, Page(9)]
        );
    }

    #[test]
    fn last_page_has_leading_gap_only() {
        assert_eq!(
            strip_items(9, 10, 5),
            vec![Page(0), Gap, Page(6), Page(7), Page(8), Page(9)]
        );
    }

    #[test]
    fn middle_page_has_gaps_on_both_sides() {
        assert_eq!(
            strip_items(5, 10, 5),
            vec![Page(0), Gap, Page(4), Page(5), Page(6), Gap, Page(9)]
        );
    }

    #[test]
    fn single_hidden_page_is_shown_instead_of_gap() {
        // Window [2, 4] leaves only page 1 between it and the first anchor.
        assert_eq!(
            strip_items(3, 10, 5),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Gap, Page(9)]
        );
        assert_eq!(
            strip_items(3, 7, 5),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn even_window_leans_forward() {
        assert_eq!(
            strip_items(10, 20, 6),
            vec![Page(0), Gap, Page(9), Page(10), Page(11), Page(12), Gap, Page(19)]
        );
    }

    #[test]
    fn minimum_window_keeps_current_page() {
        assert_eq!(strip_items(4, 9, 3), vec![Page(0), Gap, Page(4), Gap, Page(8)]);
        assert_eq!(strip_items(0, 9, 3), vec![Page(0), Page(1), Gap, Page(8)]);
    }

    #[test]
    fn item_range_clamps_last_page() {
        assert_eq!(item_range(0, 5, 47), (0, 5));
        assert_eq!(item_range(9, 5, 47), (45, 47));
        assert_eq!(item_range(12, 5, 47), (47, 47));
    }

    #[test]
    fn total_pages_rejects_zero_page_size() {
        assert!(matches!(
            total_pages(10, 0),
            Err(PaginationError::InvalidConfiguration(_))
        ));
        assert_eq!(total_pages(50, 10).unwrap(), 5);
        assert_eq!(total_pages(51, 10).unwrap(), 6);
    }
}
