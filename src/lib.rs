//! Simple UI pagination: page range calculation, a navigation controller, and a
//! terminal playground for previewing pagination states.
//!
//! The crate provides:
//! - A pure calculator deriving the visible page tokens and previous/next
//!   availability from `(index, total, page_size)`
//! - A stateful controller that validates navigation and fires a single change
//!   callback per accepted page change
//! - A plain-text renderer and a catalog of preview stories
//! - A playground binary that renders stories and plays them interactively

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Playground binary (main.rs)                        │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Playground (playground.rs)                         │  ← Commands, sessions
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Application   │   │ UI Layer      │   │ Stories       │
//! │ (app/)        │   │ (ui/)         │   │ (stories/)    │
//! │ - Events      │   │ - View model  │   │ - Built-ins   │
//! │ - Controller  │   │ - Components  │   │ - Table data  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Calculator (calculator/) & Domain (domain/)        │
//! │  - Window math, index policy                        │
//! │  - State, NavModel, errors                          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`calculator`]: Page window computation and index policy
//! - [`domain`]: Pagination state, navigation model, error types
//! - [`app`]: Event handling and the pagination controller
//! - [`ui`]: Text rendering with optional ANSI styling
//! - [`stories`]: Preview story catalog
//! - [`playground`]: Command handling for the playground binary
//! - [`infrastructure`]: Config file locations
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/simple-ui/pagination.toml
//! window_size = 7
//! index_policy = "strict"
//! color = true
//! trace_level = "info"
//!
//! [[stories]]
//! name = "Huge"
//! index = 40
//! total = 100
//! ```
//!
//! # Example
//!
//! ```rust
//! use simple_ui_pagination::{NavItem, PageRangeCalculator};
//!
//! let model = PageRangeCalculator::new(5)?.compute(0, 10, None)?;
//! assert_eq!(
//!     model.items,
//!     vec![
//!         NavItem::Page(0),
//!         NavItem::Page(1),
//!         NavItem::Page(2),
//!         NavItem::Page(3),
//!         NavItem::Gap,
//!         NavItem::Page(9),
//!     ]
//! );
//! assert!(model.can_go_next && !model.can_go_previous);
//! # Ok::<(), simple_ui_pagination::PaginationError>(())
//! ```

pub mod app;
pub mod calculator;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod playground;
pub mod stories;
pub mod ui;

pub use app::{Event, PaginationController};
pub use calculator::{IndexPolicy, PageRangeCalculator, DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE};
pub use domain::{
    Availability, NavItem, NavModel, PaginationError, PaginationProps, PaginationState, Result,
};
pub use playground::Playground;
pub use stories::{Catalog, Story};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Playground and calculator configuration.
///
/// Loaded from a TOML file (strict) and then overridden by `key=value`
/// command-line pairs (lenient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Numeric page tokens shown before collapsing into gaps.
    ///
    /// Minimum 3. Default: 7
    pub window_size: usize,

    /// Treatment of out-of-range indices. Default: `strict`
    pub index_policy: IndexPolicy,

    /// Emit ANSI styling. Default: `false`
    pub color: bool,

    /// Tracing filter directive, e.g. `debug` or `simple_ui_pagination=trace`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Extra stories appended to the built-in catalog.
    pub stories: Vec<Story>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            index_policy: IndexPolicy::Strict,
            color: false,
            trace_level: None,
            stories: Vec::new(),
        }
    }
}

impl Config {
    /// Parses configuration from a `key=value` map with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `window_size`: String → `usize` (falls back to 7 on parse error)
    /// - `index_policy`: `strict` | `lenient` (falls back to `strict`)
    /// - `color`: `true` | `false` (falls back to `false`)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use simple_ui_pagination::{Config, IndexPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("window_size".to_string(), "5".to_string());
    /// map.insert("index_policy".to_string(), "lenient".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.window_size, 5);
    /// assert_eq!(config.index_policy, IndexPolicy::Lenient);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().with_overrides(map)
    }

    /// Applies `key=value` overrides on top of this configuration.
    ///
    /// Unparseable values keep the current setting and are logged.
    #[must_use]
    pub fn with_overrides(mut self, map: &BTreeMap<String, String>) -> Self {
        if let Some(raw) = map.get("window_size") {
            match raw.trim().parse::<usize>() {
                Ok(window_size) => self.window_size = window_size,
                Err(e) => tracing::debug!(value = %raw, error = %e, "invalid window_size, keeping current"),
            }
        }

        if let Some(raw) = map.get("index_policy") {
            match raw.parse::<IndexPolicy>() {
                Ok(policy) => self.index_policy = policy,
                Err(e) => tracing::debug!(value = %raw, error = %e, "invalid index_policy, keeping current"),
            }
        }

        if let Some(raw) = map.get("color") {
            match raw.trim().parse::<bool>() {
                Ok(color) => self.color = color,
                Err(e) => tracing::debug!(value = %raw, error = %e, "invalid color flag, keeping current"),
            }
        }

        if let Some(level) = map.get("trace_level") {
            self.trace_level = Some(level.clone());
        }

        self
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Config`] if the TOML is malformed or a value
    /// has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PaginationError::Config(format!("Failed to parse config TOML: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Io`] if the file cannot be read, or
    /// [`PaginationError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Builds the calculator described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidConfiguration`] if `window_size` is
    /// below [`MIN_WINDOW_SIZE`].
    pub fn calculator(&self) -> Result<PageRangeCalculator> {
        Ok(PageRangeCalculator::new(self.window_size)?.with_policy(self.index_policy))
    }
}

/// Initializes the playground from configuration.
///
/// Builds the calculator, merges configured stories into the catalog, and
/// picks the output style.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidConfiguration`] for an invalid window size.
///
/// # Example
///
/// ```rust
/// use simple_ui_pagination::{initialize, Config};
///
/// let playground = initialize(&Config::default())?;
/// assert!(playground.catalog().find("Default").is_ok());
/// # Ok::<(), simple_ui_pagination::PaginationError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Playground> {
    tracing::debug!(
        window_size = config.window_size,
        index_policy = %config.index_policy,
        extra_stories = config.stories.len(),
        "initializing pagination playground"
    );

    Playground::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_overrides_fall_back_on_bad_values() {
        let mut map = BTreeMap::new();
        map.insert("window_size".to_string(), "many".to_string());
        map.insert("color".to_string(), "true".to_string());
        map.insert("index_policy".to_string(), "sloppy".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(config.index_policy, IndexPolicy::Strict);
        assert!(config.color);
    }

    #[test]
    fn toml_defaults_missing_fields() {
        let config = Config::from_toml_str("window_size = 5").unwrap();
        assert_eq!(config.window_size, 5);
        assert_eq!(config.index_policy, IndexPolicy::Strict);
        assert!(config.stories.is_empty());
    }

    #[test]
    fn toml_type_errors_are_config_errors() {
        let err = Config::from_toml_str("window_size = \"wide\"").unwrap_err();
        assert!(matches!(err, PaginationError::Config(_)));
    }

    #[test]
    fn calculator_rejects_small_window() {
        let config = Config {
            window_size: 2,
            ..Config::default()
        };
        assert!(matches!(
            config.calculator(),
            Err(PaginationError::InvalidConfiguration(_))
        ));
    }
}
