//! Stateful pagination controller with a change callback.
//!
//! [`PaginationController`] owns a [`PagerState`], routes events through
//! [`handle_event`], and executes the resulting actions. The change callback
//! receives the new zero-based index exactly once per accepted navigation.

use super::{handle_event, Action, Event, PagerState};
use crate::calculator::PageRangeCalculator;
use crate::domain::{NavModel, PaginationProps, Result};
use std::fmt;

/// Callback invoked with the new index after an accepted navigation.
pub type ChangeCallback = Box<dyn FnMut(usize)>;

/// Event-driven wrapper around a [`PagerState`].
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use simple_ui_pagination::app::PaginationController;
/// use simple_ui_pagination::{PageRangeCalculator, PaginationProps, PaginationState};
///
/// let seen = Rc::new(Cell::new(None));
/// let sink = Rc::clone(&seen);
///
/// let mut controller = PaginationController::new(
///     PaginationProps::new(PaginationState::new(0, 10)),
///     PageRangeCalculator::default(),
/// )?
/// .on_change(move |index| sink.set(Some(index)));
///
/// controller.next()?;
/// assert_eq!(seen.get(), Some(1));
/// # Ok::<(), simple_ui_pagination::PaginationError>(())
/// ```
pub struct PaginationController {
    state: PagerState,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationController")
            .field("state", &self.state)
            .field("has_callback", &self.on_change.is_some())
            .finish()
    }
}

impl PaginationController {
    /// Creates a controller without a callback.
    ///
    /// # Errors
    ///
    /// Returns the calculator's validation error for invalid props.
    pub fn new(props: PaginationProps, calculator: PageRangeCalculator) -> Result<Self> {
        Ok(Self {
            state: PagerState::new(props, calculator)?,
            on_change: None,
        })
    }

    /// Installs the change callback, replacing any previous one.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.set_on_change(callback);
        self
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    #[must_use]
    pub const fn state(&self) -> &PagerState {
        &self.state
    }

    #[must_use]
    pub const fn props(&self) -> &PaginationProps {
        &self.state.props
    }

    /// Derives the navigation model for the current state.
    ///
    /// # Errors
    ///
    /// Returns the calculator's validation error for invalid props.
    pub fn nav_model(&self) -> Result<NavModel> {
        self.state.nav_model()
    }

    /// Handles an event and runs its actions.
    ///
    /// Returns whether the host should re-render.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`]; on error no callback fires.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (needs_render, actions) = handle_event(&mut self.state, event)?;
        for action in actions {
            self.execute(action);
        }
        Ok(needs_render)
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::ChangeIndex { from, to } => {
                tracing::debug!(from, to, "notifying page change");
                if let Some(callback) = self.on_change.as_mut() {
                    callback(to);
                }
            }
        }
    }

    /// Navigates to a zero-based page.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn go_to(&mut self, index: usize) -> Result<bool> {
        self.dispatch(&Event::GoToPage(index))
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn next(&mut self) -> Result<bool> {
        self.dispatch(&Event::Next)
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn previous(&mut self) -> Result<bool> {
        self.dispatch(&Event::Previous)
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn first(&mut self) -> Result<bool> {
        self.dispatch(&Event::First)
    }

    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub fn last(&mut self) -> Result<bool> {
        self.dispatch(&Event::Last)
    }
}
