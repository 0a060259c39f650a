//! Text rendering layer for the pagination strip.
//!
//! This module turns navigation models into plain or ANSI-styled text through
//! small composable components. It is the playground's stand-in for the
//! component library's visual layer.
//!
//! # Architecture
//!
//! ```text
//! PagerState → compute_viewmodel → PagerViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and sizes
//! - [`renderer`]: Top-level rendering entry points
//! - [`components`]: Button, token strip and table renderers
//! - [`style`]: Optional ANSI emphasis

pub mod components;
pub mod renderer;
pub mod style;
pub mod viewmodel;

pub use renderer::{render, render_story, render_viewmodel, story_calculator};
pub use style::Style;
pub use viewmodel::{NavButton, PagerViewModel, Size, SizeLabels, TokenView};
