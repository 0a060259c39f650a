//! Composable UI component renderers.
//!
//! Each component renders one part of the pagination UI to a `String`; the
//! [`renderer`](crate::ui::renderer) composes them into lines.
//!
//! # Components
//!
//! - [`buttons`]: Previous/next/first/last buttons
//! - [`strip`]: Page and gap tokens
//! - [`table`]: Mock data table for the paged table story

mod buttons;
mod strip;
mod table;

pub use buttons::render_button;
pub use strip::{render_token, render_tokens, GAP_GLYPH};
pub use table::{render_table_headers, render_table_rows};

use crate::ui::style::Style;
use crate::ui::viewmodel::PagerViewModel;

/// Renders the full navigation line: edge buttons, arrows and page tokens.
///
/// Layout:
/// ```text
/// [first] previous  tokens...  next [last]
/// ```
pub fn render_nav_line(vm: &PagerViewModel, style: Style) -> String {
    let separator = vm.size.separator();
    let mut parts = Vec::with_capacity(5);

    if let Some(first) = &vm.first {
        parts.push(render_button(first, style));
    }
    parts.push(render_button(&vm.previous, style));
    parts.push(render_tokens(&vm.tokens, separator, style));
    parts.push(render_button(&vm.next, style));
    if let Some(last) = &vm.last {
        parts.push(render_button(last, style));
    }

    parts.join(separator)
}
