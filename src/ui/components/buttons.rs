//! Navigation button renderer.

use crate::ui::style::Style;
use crate::ui::viewmodel::NavButton;

/// Renders a previous/next/first/last button.
///
/// Enabled buttons render their label as-is; disabled ones go through
/// [`Style::inactive`].
///
/// # Example
///
/// ```text
/// ‹ Prev        enabled
/// (‹ Prev)      disabled, colour off
/// ```
pub fn render_button(button: &NavButton, style: Style) -> String {
    if button.enabled {
        button.label.to_string()
    } else {
        style.inactive(button.label)
    }
}
