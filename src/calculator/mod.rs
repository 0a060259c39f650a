//! Page range calculation.
//!
//! [`PageRangeCalculator`] turns a pagination state into a [`NavModel`]. It holds
//! only configuration (window size and out-of-range policy), so it is `Copy` and
//! can be shared freely between component instances.
//!
//! # Algorithm
//!
//! 1. If `total <= window_size`, every page is shown and there are no gaps
//! 2. Otherwise the first and last pages are always shown as anchors
//! 3. `window_size - 2` interior pages are centered on the current index,
//!    sliding inward near either end
//! 4. A gap separates the window from an anchor when pages are hidden between
//!    them; a gap that would hide exactly one page shows that page instead
//! 5. Previous/next availability comes from the position unless overridden
//!
//! # Example
//!
//! ```rust
//! use simple_ui_pagination::{NavItem, PageRangeCalculator};
//!
//! let calculator = PageRangeCalculator::new(5)?;
//! let model = calculator.compute(5, 10, None)?;
//!
//! assert_eq!(model.items.first(), Some(&NavItem::Page(0)));
//! assert_eq!(model.items.last(), Some(&NavItem::Page(9)));
//! assert_eq!(model.gap_count(), 2);
//! # Ok::<(), simple_ui_pagination::PaginationError>(())
//! ```

mod window;

pub use window::{item_range, total_pages};

use crate::domain::{NavModel, PaginationError, PaginationProps, PaginationState, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric tokens shown when no window size is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// Smallest window that still fits both anchors and the current page.
pub const MIN_WINDOW_SIZE: usize = 3;

/// How an index outside `[0, total - 1]` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// Reject with [`PaginationError::IndexOutOfRange`].
    #[default]
    Strict,
    /// Clamp to the last page and log a warning.
    Lenient,
}

impl FromStr for IndexPolicy {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(PaginationError::Config(format!(
                "unknown index policy '{other}', expected 'strict' or 'lenient'"
            ))),
        }
    }
}

impl fmt::Display for IndexPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lenient => f.write_str("lenient"),
        }
    }
}

/// Derives navigation models from pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRangeCalculator {
    window_size: usize,
    policy: IndexPolicy,
}

impl Default for PageRangeCalculator {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            policy: IndexPolicy::Strict,
        }
    }
}

impl PageRangeCalculator {
    /// Creates a strict calculator with the given window size.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidConfiguration`] if `window_size` is below
    /// [`MIN_WINDOW_SIZE`].
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size < MIN_WINDOW_SIZE {
            return Err(PaginationError::InvalidConfiguration(format!(
                "window_size must be at least {MIN_WINDOW_SIZE}, got {window_size}"
            )));
        }
        Ok(Self {
            window_size,
            policy: IndexPolicy::Strict,
        })
    }

    /// Returns a copy using the given out-of-range policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: IndexPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    #[must_use]
    pub const fn policy(&self) -> IndexPolicy {
        self.policy
    }

    /// Computes the model for `(index, total, page_size?)` with computed availability.
    ///
    /// `page_size` is validated but does not affect the layout; it only matters
    /// upstream where `total` is derived.
    ///
    /// # Errors
    ///
    /// See [`compute_props`](Self::compute_props).
    pub fn compute(&self, index: usize, total: usize, page_size: Option<usize>) -> Result<NavModel> {
        let mut state = PaginationState::new(index, total);
        if let Some(page_size) = page_size {
            state = state.with_page_size(page_size);
        }
        self.compute_props(&PaginationProps::new(state))
    }

    /// Computes the model for a caller-owned state with computed availability.
    ///
    /// # Errors
    ///
    /// See [`compute_props`](Self::compute_props).
    pub fn compute_state(&self, state: &PaginationState) -> Result<NavModel> {
        self.compute_props(&PaginationProps::new(*state))
    }

    /// Computes the model for the full input contract.
    ///
    /// Explicit `has_next` / `has_previous` overrides replace the computed flags.
    ///
    /// # Errors
    ///
    /// - [`PaginationError::InvalidConfiguration`] for `total < 1` or `page_size < 1`
    /// - [`PaginationError::IndexOutOfRange`] for `index >= total` under the strict policy
    pub fn compute_props(&self, props: &PaginationProps) -> Result<NavModel> {
        let state = &props.state;
        let _span = tracing::debug_span!("compute_nav_model",
            index = state.index,
            total = state.total,
            window_size = self.window_size
        )
        .entered();

        let index = self.resolve_index(state)?;
        let total = state.total;

        let items = window::strip_items(index, total, self.window_size);
        let can_go_previous = props.has_previous.resolve(index > 0);
        let can_go_next = props.has_next.resolve(index < total - 1);

        tracing::debug!(
            items = items.len(),
            can_go_previous,
            can_go_next,
            "nav model computed"
        );

        Ok(NavModel {
            items,
            can_go_next,
            can_go_previous,
            current: index,
            total,
        })
    }

    /// Validates the state and applies the index policy.
    ///
    /// # Errors
    ///
    /// Same as [`compute_props`](Self::compute_props).
    pub fn resolve_index(&self, state: &PaginationState) -> Result<usize> {
        state.validate_shape()?;
        if state.index < state.total {
            return Ok(state.index);
        }
        match self.policy {
            IndexPolicy::Strict => Err(PaginationError::IndexOutOfRange {
                index: state.index,
                total: state.total,
            }),
            IndexPolicy::Lenient => {
                let clamped = state.clamp_index(state.index);
                tracing::warn!(
                    index = state.index,
                    total = state.total,
                    clamped,
                    "index out of range, clamping"
                );
                Ok(clamped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Availability, NavItem};

    fn calc(window_size: usize) -> PageRangeCalculator {
        PageRangeCalculator::new(window_size).unwrap()
    }

    #[test]
    fn rejects_tiny_window() {
        assert!(matches!(
            PageRangeCalculator::new(2),
            Err(PaginationError::InvalidConfiguration(_))
        ));
        assert!(PageRangeCalculator::new(MIN_WINDOW_SIZE).is_ok());
    }

    #[test]
    fn single_page_has_no_navigation() {
        let model = calc(5).compute(0, 1, None).unwrap();
        assert_eq!(model.items, vec![NavItem::Page(0)]);
        assert!(!model.can_go_next);
        assert!(!model.can_go_previous);
    }

    #[test]
    fn last_page_disables_next() {
        let model = PageRangeCalculator::default().compute(9, 10, None).unwrap();
        assert!(!model.can_go_next);
        assert!(model.can_go_previous);
    }

    #[test]
    fn first_page_window_of_five() {
        let model = calc(5).compute(0, 10, None).unwrap();
        assert_eq!(model.items[0], NavItem::Page(0));
        assert_ne!(model.items[1], NavItem::Gap);
        let n = model.items.len();
        assert_eq!(model.items[n - 2], NavItem::Gap);
        assert_eq!(model.items[n - 1], NavItem::Page(9));
    }

    #[test]
    fn flags_follow_position_for_every_index() {
        let calculator = calc(5);
        for total in 1..=15 {
            for index in 0..total {
                let model = calculator.compute(index, total, None).unwrap();
                assert_eq!(model.can_go_previous, index > 0);
                assert_eq!(model.can_go_next, index < total - 1);
                assert!(model.contains_page(index));
                assert!(model.contains_page(0));
                assert!(model.contains_page(total - 1));
            }
        }
    }

    #[test]
    fn gaps_never_hide_a_single_page() {
        let calculator = calc(7);
        for total in 1..=30 {
            for index in 0..total {
                let model = calculator.compute(index, total, None).unwrap();
                let pages: Vec<usize> = model.pages().collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]));
                for (i, item) in model.items.iter().enumerate() {
                    if item.is_gap() {
                        let before = model.items[i - 1].page_index().unwrap();
                        let after = model.items[i + 1].page_index().unwrap();
                        assert!(after - before > 2, "gap hides one page at {total}/{index}");
                    }
                }
            }
        }
    }

    #[test]
    fn page_size_does_not_change_layout() {
        let calculator = calc(5);
        assert_eq!(
            calculator.compute(4, 12, Some(5)).unwrap(),
            calculator.compute(4, 12, Some(50)).unwrap()
        );
    }

    #[test]
    fn zero_total_and_page_size_are_invalid() {
        let calculator = PageRangeCalculator::default();
        assert!(matches!(
            calculator.compute(0, 0, None),
            Err(PaginationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            calculator.compute(0, 4, Some(0)),
            Err(PaginationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn strict_rejects_and_lenient_clamps() {
        let strict = PageRangeCalculator::default();
        assert!(matches!(
            strict.compute(12, 10, None),
            Err(PaginationError::IndexOutOfRange { index: 12, total: 10 })
        ));

        let lenient = strict.with_policy(IndexPolicy::Lenient);
        let model = lenient.compute(12, 10, None).unwrap();
        assert_eq!(model.current, 9);
        assert!(!model.can_go_next);
    }

    #[test]
    fn explicit_availability_overrides_computed() {
        let props = PaginationProps::new(PaginationState::new(0, 10))
            .with_availability(Availability::Explicit(false), Availability::Explicit(true));
        let model = PageRangeCalculator::default().compute_props(&props).unwrap();
        assert!(!model.can_go_next);
        assert!(model.can_go_previous);
    }

    #[test]
    fn policy_parses_from_str() {
        assert_eq!("Lenient".parse::<IndexPolicy>().unwrap(), IndexPolicy::Lenient);
        assert!("loose".parse::<IndexPolicy>().is_err());
        assert_eq!(IndexPolicy::Strict.to_string(), "strict");
    }
}
