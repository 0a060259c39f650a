//! Top-level rendering coordinator.
//!
//! This module provides the rendering entry points, coordinating view model
//! computation and delegation to UI components. Output is returned as a
//! `String` so hosts decide where it goes.
//!
//! # Example
//!
//! ```rust
//! use simple_ui_pagination::app::PagerState;
//! use simple_ui_pagination::ui::{render, Size, Style};
//! use simple_ui_pagination::{PageRangeCalculator, PaginationProps, PaginationState};
//!
//! let state = PagerState::new(
//!     PaginationProps::new(PaginationState::new(0, 10)),
//!     PageRangeCalculator::new(5)?,
//! )?;
//! let out = render(&state, Size::Small, Style::plain())?;
//! assert_eq!(out.lines().next(), Some("(‹) [1] 2 3 4 … 10 ›"));
//! # Ok::<(), simple_ui_pagination::PaginationError>(())
//! ```

use crate::app::PagerState;
use crate::calculator::PageRangeCalculator;
use crate::domain::Result;
use crate::stories::table::{page_rows, showing_summary};
use crate::stories::Story;
use crate::ui::components;
use crate::ui::style::Style;
use crate::ui::viewmodel::{PagerViewModel, Size};

/// Renders the navigation line and status line for a state.
///
/// # Errors
///
/// Returns the calculator's validation error for invalid props.
pub fn render(state: &PagerState, size: Size, style: Style) -> Result<String> {
    let viewmodel = state.compute_viewmodel(size)?;
    Ok(render_viewmodel(&viewmodel, style))
}

/// Renders a pre-computed view model.
///
/// ```text
/// ‹ Prev  1  [2]  3  4  5  6  …  10  Next ›
/// Page 2 of 10
/// ```
#[must_use]
pub fn render_viewmodel(vm: &PagerViewModel, style: Style) -> String {
    let nav = components::render_nav_line(vm, style);
    format!("{nav}\n{}", style.muted(&vm.status))
}

/// Renders a story: title, description, optional table, and the strip.
///
/// `state` is the live state when the story is being played; `None` renders the
/// story's initial props.
///
/// # Errors
///
/// Returns the calculator's validation error for invalid props.
pub fn render_story(
    story: &Story,
    calculator: PageRangeCalculator,
    state: Option<&PagerState>,
    style: Style,
) -> Result<String> {
    let state = match state {
        Some(state) => *state,
        None => PagerState::new(story.resolved_props()?, story_calculator(story, calculator)?)?,
    };

    let mut lines = vec![style.strong(&format!("== {} ==", story.name))];
    if !story.description.is_empty() {
        lines.push(story.description.clone());
    }
    lines.push(String::new());

    if let Some(table) = story.table {
        let index = state.current_index()?;
        let page_size = state.props.state.page_size;
        lines.push(components::render_table_headers(style));
        lines.extend(components::render_table_rows(&page_rows(
            index,
            page_size,
            table.total_items,
        )));
        lines.push(String::new());
        lines.push(showing_summary(index, page_size, table.total_items));
    }

    lines.push(render(&state, story.size, style)?);
    Ok(lines.join("\n"))
}

/// Calculator for a story, honoring its window size override.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidConfiguration`](crate::PaginationError::InvalidConfiguration)
/// for an override below the minimum window size.
pub fn story_calculator(story: &Story, calculator: PageRangeCalculator) -> Result<PageRangeCalculator> {
    story.window_size.map_or(Ok(calculator), |window_size| {
        Ok(PageRangeCalculator::new(window_size)?.with_policy(calculator.policy()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PaginationProps, PaginationState};
    use crate::stories::Catalog;

    fn state(index: usize, total: usize) -> PagerState {
        PagerState::new(
            PaginationProps::new(PaginationState::new(index, total)),
            PageRangeCalculator::new(5).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn medium_strip_middle_page() {
        let out = render(&state(5, 10), Size::Medium, Style::plain()).unwrap();
        assert_eq!(
            out,
            "‹ Prev  1  …  5  [6]  7  …  10  Next ›\nPage 6 of 10"
        );
    }

    #[test]
    fn large_strip_disables_trailing_buttons_on_last_page() {
        let out = render(&state(9, 10), Size::Large, Style::plain()).unwrap();
        let nav = out.lines().next().unwrap();
        assert!(nav.starts_with("« First  ‹ Previous  1  …"));
        assert!(nav.ends_with("[10]  (Next ›)  (Last »)"));
    }

    #[test]
    fn colored_output_uses_ansi() {
        let out = render(&state(0, 1), Size::Small, Style::colored()).unwrap();
        assert!(out.contains(Style::bold()));
        assert!(out.contains(Style::dim()));
        assert!(!out.contains("(‹)"));
    }

    #[test]
    fn table_story_lists_first_page_rows() {
        let catalog = Catalog::builtin();
        let story = catalog.find("TableExample").unwrap();
        let out = render_story(story, PageRangeCalculator::default(), None, Style::plain()).unwrap();
        assert!(out.contains("Item 5"));
        assert!(!out.contains("Item 6 "));
        assert!(out.contains("Showing 1 to 5 of 47 items"));
        assert!(out.contains("Page 1 of 10"));
    }

    #[test]
    fn story_window_override_is_validated() {
        let mut story = Catalog::builtin().find("Default").unwrap().clone();
        story.window_size = Some(1);
        assert!(story_calculator(&story, PageRangeCalculator::default()).is_err());
    }
}
