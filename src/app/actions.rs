//! Actions representing side effects to be executed by the controller.
//!
//! The event handler is pure over [`PagerState`](super::PagerState): it mutates
//! state and returns actions, and the [`PaginationController`](super::PaginationController)
//! executes them. Firing the change callback is the only side effect.

/// Commands produced by the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Notifies the owning UI that the current page changed.
    ///
    /// Emitted at most once per navigation event, never when `from == to`.
    ChangeIndex {
        /// Index before the navigation.
        from: usize,
        /// Accepted target index, already clamped.
        to: usize,
    },
}
