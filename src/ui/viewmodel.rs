//! View model types representing a renderable pagination strip.
//!
//! View models are computed by [`PagerState::compute_viewmodel`](crate::app::PagerState::compute_viewmodel)
//! and consumed by the renderer. They contain no business logic, only
//! display-ready data.

use crate::domain::{PaginationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual size of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Arrow-only buttons, single-space separators.
    Small,
    /// Short button labels.
    #[default]
    Medium,
    /// Full labels plus first/last buttons.
    Large,
}

/// Button labels for one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLabels {
    pub first: Option<&'static str>,
    pub previous: &'static str,
    pub next: &'static str,
    pub last: Option<&'static str>,
}

impl Size {
    #[must_use]
    pub const fn labels(self) -> SizeLabels {
        match self {
            Self::Small => SizeLabels {
                first: None,
                previous: "‹",
                next: "›",
                last: None,
            },
            Self::Medium => SizeLabels {
                first: None,
                previous: "‹ Prev",
                next: "Next ›",
                last: None,
            },
            Self::Large => SizeLabels {
                first: Some("« First"),
                previous: "‹ Previous",
                next: "Next ›",
                last: Some("Last »"),
            },
        }
    }

    /// Separator placed between tokens.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Small => " ",
            Self::Medium | Self::Large => "  ",
        }
    }
}

impl FromStr for Size {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(PaginationError::Config(format!(
                "unknown size '{other}', expected small, medium or large"
            ))),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        })
    }
}

/// Complete view model for one pagination strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerViewModel {
    /// Size the labels were chosen for.
    pub size: Size,
    /// Jump-to-first button, large size only.
    pub first: Option<NavButton>,
    pub previous: NavButton,
    /// Page and gap tokens in display order.
    pub tokens: Vec<TokenView>,
    pub next: NavButton,
    /// Jump-to-last button, large size only.
    pub last: Option<NavButton>,
    /// Human-readable position, e.g. "Page 3 of 10".
    pub status: String,
}

/// A previous/next/first/last button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub label: &'static str,
    pub enabled: bool,
}

/// Display form of a [`NavItem`](crate::NavItem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenView {
    /// One-based page label.
    Page { label: usize, is_current: bool },
    Gap,
}
