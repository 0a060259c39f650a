//! Structured logging setup.
//!
//! All modules log through `tracing` macros; this module installs the
//! subscriber that filters and prints them.
//!
//! # Configuration
//!
//! The filter is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Output goes to stderr so it never interleaves with rendered strips on stdout.
//!
//! # Usage
//!
//! ```rust
//! use simple_ui_pagination::observability::init_tracing;
//! use simple_ui_pagination::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("playground initialized");
//! ```

mod init;

pub use init::{init_tracing, resolve_filter};
