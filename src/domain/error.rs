//! Error types for pagination calculation and the playground.
//!
//! This module defines the centralized error type [`PaginationError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for pagination operations.
///
/// Every failure is local and synchronous: the calculator and controller are pure
/// computations, so nothing here is retried. Callers surface these to the user.
///
/// # Examples
///
/// ```
/// use simple_ui_pagination::PaginationError;
///
/// let err = PaginationError::IndexOutOfRange { index: 12, total: 10 };
/// assert_eq!(err.to_string(), "Index 12 out of range for 10 pages");
/// ```
#[derive(Debug, Error)]
pub enum PaginationError {
    /// Inputs that can never describe a valid pagination.
    ///
    /// Raised for `total < 1`, `page_size < 1`, or a window too small to hold
    /// both anchors and a current page. The string names the offending value.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The requested index does not address any page.
    ///
    /// Only raised under [`IndexPolicy::Strict`](crate::IndexPolicy::Strict);
    /// the lenient policy clamps instead.
    #[error("Index {index} out of range for {total} pages")]
    IndexOutOfRange {
        /// The rejected zero-based index.
        index: usize,
        /// Total page count the index was checked against.
        total: usize,
    },

    /// Configuration file or value could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading configuration files or the playground's stdin.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A navigation model could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No story with the requested name exists in the catalog.
    #[error("Unknown story: {0}")]
    UnknownStory(String),
}

/// A specialized `Result` type for pagination operations.
pub type Result<T> = std::result::Result<T, PaginationError>;
