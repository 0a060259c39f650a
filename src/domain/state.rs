//! Pagination input state and availability overrides.
//!
//! [`PaginationState`] is the `(index, total, page_size)` triple owned by the
//! surrounding UI. [`PaginationProps`] adds the optional `has_next` /
//! `has_previous` overrides a caller may supply when it cannot know the total
//! up front.

use super::error::{PaginationError, Result};
use serde::{Deserialize, Serialize};

/// Items per page when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current position within a paginated collection.
///
/// The calculator never mutates this value; it only derives from it. The
/// invariant `index < total` is checked by [`PaginationState::validate`] rather
/// than enforced on construction, so the owning UI can hold a transiently
/// invalid state and decide how to correct it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Zero-based index of the current page.
    pub index: usize,
    /// Total number of pages.
    pub total: usize,
    /// Items per page. Only used upstream to derive `total`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl PaginationState {
    /// Creates a state with the default page size.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_ui_pagination::PaginationState;
    ///
    /// let state = PaginationState::new(3, 10);
    /// assert_eq!(state.page_size, 10);
    /// ```
    #[must_use]
    pub const fn new(index: usize, total: usize) -> Self {
        Self {
            index,
            total,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Returns a copy with the given page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Checks `total` and `page_size`, leaving the index to the caller's policy.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidConfiguration`] if `total` or
    /// `page_size` is zero.
    pub fn validate_shape(&self) -> Result<()> {
        if self.total < 1 {
            return Err(PaginationError::InvalidConfiguration(format!(
                "total must be at least 1, got {}",
                self.total
            )));
        }
        if self.page_size < 1 {
            return Err(PaginationError::InvalidConfiguration(format!(
                "page_size must be at least 1, got {}",
                self.page_size
            )));
        }
        Ok(())
    }

    /// Checks every field including the index bound.
    ///
    /// # Errors
    ///
    /// Returns the first failure of [`validate_shape`](Self::validate_shape), or
    /// [`PaginationError::IndexOutOfRange`] when `index >= total`.
    pub fn validate(&self) -> Result<()> {
        self.validate_shape()?;
        if self.index >= self.total {
            return Err(PaginationError::IndexOutOfRange {
                index: self.index,
                total: self.total,
            });
        }
        Ok(())
    }

    /// Index of the last page.
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// Clamps an arbitrary index into `[0, total - 1]`.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }
}

/// Whether a navigation direction is available.
///
/// `Computed` derives the flag from the index and total; `Explicit` is an
/// override from the owning UI and always takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    /// Derive from position.
    #[default]
    Computed,
    /// Caller-supplied value.
    Explicit(bool),
}

impl Availability {
    /// Resolves the override against the computed flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_ui_pagination::Availability;
    ///
    /// assert!(Availability::Computed.resolve(true));
    /// assert!(!Availability::Explicit(false).resolve(true));
    /// ```
    #[must_use]
    pub const fn resolve(self, computed: bool) -> bool {
        match self {
            Self::Computed => computed,
            Self::Explicit(value) => value,
        }
    }
}

impl From<Option<bool>> for Availability {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Computed, Self::Explicit)
    }
}

/// Full input contract from the owning UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationProps {
    /// Position and size of the collection.
    #[serde(flatten)]
    pub state: PaginationState,
    /// Override for the "next" button.
    #[serde(default, with = "availability_flag")]
    pub has_next: Availability,
    /// Override for the "previous" button.
    #[serde(default, with = "availability_flag")]
    pub has_previous: Availability,
}

impl PaginationProps {
    /// Props with computed availability in both directions.
    #[must_use]
    pub const fn new(state: PaginationState) -> Self {
        Self {
            state,
            has_next: Availability::Computed,
            has_previous: Availability::Computed,
        }
    }

    /// Sets both availability overrides.
    #[must_use]
    pub const fn with_availability(mut self, has_next: Availability, has_previous: Availability) -> Self {
        self.has_next = has_next;
        self.has_previous = has_previous;
        self
    }
}

/// Maps `Availability` to an optional bool in TOML/JSON (`has_next = true`).
mod availability_flag {
    use super::Availability;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Availability, serializer: S) -> Result<S::Ok, S::Error> {
        let flag = match value {
            Availability::Computed => None,
            Availability::Explicit(flag) => Some(*flag),
        };
        flag.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Availability, D::Error> {
        Ok(Option::<bool>::deserialize(deserializer)?.into())
    }
}
