//! ANSI styling for the text renderer.
//!
//! Colour output is optional: with `color` off, emphasis falls back to plain
//! punctuation so the strip stays readable in logs and test snapshots.

/// Text styling switches for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Emit ANSI escape sequences.
    pub color: bool,
}

impl Style {
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    #[must_use]
    pub const fn colored() -> Self {
        Self { color: true }
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Wraps text in bold when colour is on.
    #[must_use]
    pub fn strong(self, text: &str) -> String {
        if self.color {
            format!("{}{text}{}", Self::bold(), Self::reset())
        } else {
            text.to_string()
        }
    }

    /// Marks text as inactive: dimmed with colour, parenthesized without.
    #[must_use]
    pub fn inactive(self, text: &str) -> String {
        if self.color {
            format!("{}{text}{}", Self::dim(), Self::reset())
        } else {
            format!("({text})")
        }
    }

    /// Dims secondary text when colour is on.
    #[must_use]
    pub fn muted(self, text: &str) -> String {
        if self.color {
            format!("{}{text}{}", Self::dim(), Self::reset())
        } else {
            text.to_string()
        }
    }
}
