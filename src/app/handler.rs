//! Event handling and state transition logic.
//!
//! This module implements the handler that turns navigation requests and
//! external prop updates into state changes and [`Action`]s.
//!
//! # Event Types
//!
//! - **Navigation**: `GoToPage`, `Next`, `Previous`, `First`, `Last`. Accepted
//!   navigation moves the index and emits exactly one `ChangeIndex` action.
//! - **External updates**: `SetIndex`, `SetTotal`, `SetPageSize`,
//!   `SetAvailability`. These come from the owning UI, re-derive the model, and
//!   never emit `ChangeIndex`.
//!
//! Navigation is suppressed (no action, no render) when the target equals the
//! current index or the direction's availability flag is false.
//!
//! # Example
//!
//! ```rust
//! use simple_ui_pagination::app::{handle_event, Action, Event, PagerState};
//! use simple_ui_pagination::{PageRangeCalculator, PaginationProps, PaginationState};
//!
//! let mut state = PagerState::new(
//!     PaginationProps::new(PaginationState::new(0, 10)),
//!     PageRangeCalculator::default(),
//! )?;
//! let (render, actions) = handle_event(&mut state, &Event::Next)?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::ChangeIndex { from: 0, to: 1 }]);
//! # Ok::<(), simple_ui_pagination::PaginationError>(())
//! ```

use crate::app::{Action, PagerState};
use crate::domain::error::Result;
use crate::domain::Availability;

/// Requests from the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Click on a page token, zero-based. Out-of-range targets are clamped.
    GoToPage(usize),
    /// Advance one page.
    Next,
    /// Go back one page.
    Previous,
    /// Jump to the first page. Gated by previous-availability.
    First,
    /// Jump to the last page. Gated by next-availability.
    Last,

    /// The owning UI moved the index itself.
    SetIndex(usize),
    /// The owning UI changed the page count.
    SetTotal(usize),
    /// The owning UI changed the page size.
    SetPageSize(usize),
    /// The owning UI changed the availability overrides.
    SetAvailability {
        /// Override for the "next" direction.
        has_next: Availability,
        /// Override for the "previous" direction.
        has_previous: Availability,
    },
}

/// Processes an event, mutates state, and returns `(needs_render, actions)`.
///
/// External updates are applied to a copy first and only committed when the
/// calculator accepts them, so a rejected update leaves the state untouched.
///
/// # Errors
///
/// Returns the calculator's validation error when the current or updated props
/// are invalid under its index policy.
pub fn handle_event(state: &mut PagerState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::GoToPage(_) | Event::Next | Event::Previous | Event::First | Event::Last => {
            navigate(state, event)
        }
        Event::SetIndex(index) => update(state, |next| next.props.state.index = *index),
        Event::SetTotal(total) => update(state, |next| next.props.state.total = *total),
        Event::SetPageSize(page_size) => {
            update(state, |next| next.props.state.page_size = *page_size)
        }
        Event::SetAvailability {
            has_next,
            has_previous,
        } => update(state, |next| {
            next.props.has_next = *has_next;
            next.props.has_previous = *has_previous;
        }),
    }
}

fn navigate(state: &mut PagerState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let model = state.nav_model()?;
    let current = model.current;
    let last = state.props.state.last_index();

    let target = match event {
        Event::GoToPage(index) => Some(state.props.state.clamp_index(*index)),
        Event::Next => model.can_go_next.then(|| (current + 1).min(last)),
        Event::Previous => model.can_go_previous.then(|| current.saturating_sub(1)),
        Event::First => model.can_go_previous.then_some(0),
        Event::Last => model.can_go_next.then_some(last),
        _ => None,
    };

    let Some(target) = target else {
        tracing::debug!(current, "navigation unavailable in requested direction");
        return Ok((false, vec![]));
    };

    if target == current {
        tracing::debug!(current, "navigation to current page suppressed");
        return Ok((false, vec![]));
    }

    tracing::debug!(from = current, to = target, "page change accepted");
    state.props.state.index = target;
    Ok((true, vec![Action::ChangeIndex { from: current, to: target }]))
}

fn update(state: &mut PagerState, apply: impl FnOnce(&mut PagerState)) -> Result<(bool, Vec<Action>)> {
    let mut next = *state;
    apply(&mut next);
    if next == *state {
        return Ok((false, vec![]));
    }
    next.nav_model()?;
    *state = next;
    Ok((true, vec![]))
}
