//! Page token strip renderer.

use crate::ui::style::Style;
use crate::ui::viewmodel::TokenView;

/// Glyph used for gap tokens.
pub const GAP_GLYPH: &str = "…";

/// Renders one page or gap token.
///
/// The current page is bracketed, and additionally bold when colour is on.
pub fn render_token(token: &TokenView, style: Style) -> String {
    match token {
        TokenView::Page {
            label,
            is_current: true,
        } => style.strong(&format!("[{label}]")),
        TokenView::Page { label, .. } => label.to_string(),
        TokenView::Gap => GAP_GLYPH.to_string(),
    }
}

/// Renders the page tokens joined by `separator`.
pub fn render_tokens(tokens: &[TokenView], separator: &str, style: Style) -> String {
    tokens
        .iter()
        .map(|token| render_token(token, style))
        .collect::<Vec<_>>()
        .join(separator)
}
