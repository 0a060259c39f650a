//! Controller state and view model computation.
//!
//! [`PagerState`] pairs the caller's [`PaginationProps`] with the calculator that
//! derives from them. It is the single source of truth the event handler
//! mutates; navigation models and view models are computed on demand from it.
//!
//! # Example
//!
//! ```rust
//! use simple_ui_pagination::app::PagerState;
//! use simple_ui_pagination::{PageRangeCalculator, PaginationProps, PaginationState};
//!
//! let state = PagerState::new(
//!     PaginationProps::new(PaginationState::new(0, 10)),
//!     PageRangeCalculator::default(),
//! )?;
//! assert!(state.nav_model()?.can_go_next);
//! # Ok::<(), simple_ui_pagination::PaginationError>(())
//! ```

use crate::calculator::PageRangeCalculator;
use crate::domain::{NavItem, NavModel, PaginationProps, Result};
use crate::ui::viewmodel::{NavButton, PagerViewModel, Size, TokenView};

/// Pagination props plus the calculator that interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    /// Current input contract. Mutated by the event handler.
    pub props: PaginationProps,

    /// Window size and index policy used for every derivation.
    pub calculator: PageRangeCalculator,
}

impl PagerState {
    /// Creates a state, rejecting props the calculator cannot derive from.
    ///
    /// # Errors
    ///
    /// Returns the calculator's validation error for invalid props.
    pub fn new(props: PaginationProps, calculator: PageRangeCalculator) -> Result<Self> {
        let state = Self { props, calculator };
        state.nav_model()?;
        Ok(state)
    }

    /// Derives the navigation model for the current props.
    ///
    /// # Errors
    ///
    /// Returns the calculator's validation error for invalid props.
    pub fn nav_model(&self) -> Result<NavModel> {
        self.calculator.compute_props(&self.props)
    }

    /// Effective current index after the calculator's index policy.
    ///
    /// # Errors
    ///
    /// Returns the calculator's validation error for invalid props.
    pub fn current_index(&self) -> Result<usize> {
        self.calculator.resolve_index(&self.props.state)
    }

    /// Computes a renderable view model for the given size.
    ///
    /// Small and medium strips show only previous/next; large strips add
    /// first/last buttons, which share availability with previous/next.
    ///
    /// # Errors
    ///
    /// Returns the calculator's validation error for invalid props.
    pub fn compute_viewmodel(&self, size: Size) -> Result<PagerViewModel> {
        let model = self.nav_model()?;
        Ok(Self::viewmodel_from(&model, size))
    }

    /// Builds a view model from an already computed navigation model.
    #[must_use]
    pub fn viewmodel_from(model: &NavModel, size: Size) -> PagerViewModel {
        let labels = size.labels();

        let tokens = model
            .items
            .iter()
            .map(|item| match item {
                NavItem::Page(index) => TokenView::Page {
                    label: index + 1,
                    is_current: *index == model.current,
                },
                NavItem::Gap => TokenView::Gap,
            })
            .collect();

        let button = |label: &'static str, enabled: bool| NavButton { label, enabled };

        PagerViewModel {
            size,
            first: labels.first.map(|label| button(label, model.can_go_previous)),
            previous: button(labels.previous, model.can_go_previous),
            tokens,
            next: button(labels.next, model.can_go_next),
            last: labels.last.map(|label| button(label, model.can_go_next)),
            status: format!("Page {} of {}", model.current + 1, model.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PaginationError, PaginationState};

    fn state(index: usize, total: usize) -> PagerState {
        PagerState::new(
            PaginationProps::new(PaginationState::new(index, total)),
            PageRangeCalculator::new(5).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_invalid_props() {
        let err = PagerState::new(
            PaginationProps::new(PaginationState::new(3, 0)),
            PageRangeCalculator::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PaginationError::InvalidConfiguration(_)));
    }

    #[test]
    fn viewmodel_marks_current_page() {
        let vm = state(5, 10).compute_viewmodel(Size::Medium).unwrap();
        let current: Vec<usize> = vm
            .tokens
            .iter()
            .filter_map(|t| match t {
                TokenView::Page { label, is_current: true } => Some(*label),
                _ => None,
            })
            .collect();
        assert_eq!(current, vec![6]);
        assert_eq!(vm.status, "Page 6 of 10");
        assert!(vm.first.is_none());
    }

    #[test]
    fn large_viewmodel_has_edge_buttons() {
        let vm = state(0, 10).compute_viewmodel(Size::Large).unwrap();
        let first = vm.first.unwrap();
        let last = vm.last.unwrap();
        assert!(!first.enabled);
        assert!(last.enabled);
        assert!(!vm.previous.enabled);
        assert!(vm.next.enabled);
    }
}
