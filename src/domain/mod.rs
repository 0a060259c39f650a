//! Domain layer for pagination.
//!
//! This module contains the core value types, independent of how the navigation
//! strip is calculated or rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`state`]: Caller-owned pagination state and availability overrides
//! - [`nav`]: Navigation tokens and the derived model
//!
//! # Examples
//!
//! ```
//! use simple_ui_pagination::domain::{PaginationState, Result};
//!
//! fn current() -> Result<PaginationState> {
//!     let state = PaginationState::new(2, 10);
//!     state.validate()?;
//!     Ok(state)
//! }
//! # current().unwrap();
//! ```

pub mod error;
pub mod nav;
pub mod state;

pub use error::{PaginationError, Result};
pub use nav::{NavItem, NavModel};
pub use state::{Availability, PaginationProps, PaginationState, DEFAULT_PAGE_SIZE};
