//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the pure calculator and the rendering host. It
//! replaces a reactive re-render model with explicit event dispatch:
//!
//! ```text
//! Host input → Event → handle_event → State mutation → Actions → Change callback
//!                                          ↓
//!                                 recompute NavModel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: Stateful controller owning the change callback
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: Props + calculator and view model computation

pub mod actions;
pub mod controller;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use controller::{ChangeCallback, PaginationController};
pub use handler::{handle_event, Event};
pub use state::PagerState;
