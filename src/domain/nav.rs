//! Navigation model derived from a pagination state.
//!
//! A [`NavModel`] is the renderable output of the calculator: an ordered strip of
//! [`NavItem`] tokens plus the availability of the previous/next buttons. It is
//! rebuilt on every input change and has no identity beyond the call that
//! produced it.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A single token in the navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    /// A clickable page, holding its zero-based index.
    Page(usize),
    /// A non-interactive ellipsis standing in for one or more hidden pages.
    Gap,
}

impl NavItem {
    /// One-based label shown to the user, `None` for gaps.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_ui_pagination::NavItem;
    ///
    /// assert_eq!(NavItem::Page(0).label(), Some(1));
    /// assert_eq!(NavItem::Gap.label(), None);
    /// ```
    #[must_use]
    pub const fn label(self) -> Option<usize> {
        match self {
            Self::Page(index) => Some(index + 1),
            Self::Gap => None,
        }
    }

    /// Zero-based page index, `None` for gaps.
    #[must_use]
    pub const fn page_index(self) -> Option<usize> {
        match self {
            Self::Page(index) => Some(index),
            Self::Gap => None,
        }
    }

    #[must_use]
    pub const fn is_gap(self) -> bool {
        matches!(self, Self::Gap)
    }
}

// Serialized as `{"kind":"page","index":0,"label":1}` / `{"kind":"gap"}`.
impl Serialize for NavItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(index) => {
                let mut item = serializer.serialize_struct("NavItem", 3)?;
                item.serialize_field("kind", "page")?;
                item.serialize_field("index", index)?;
                item.serialize_field("label", &(index + 1))?;
                item.end()
            }
            Self::Gap => {
                let mut item = serializer.serialize_struct("NavItem", 1)?;
                item.serialize_field("kind", "gap")?;
                item.end()
            }
        }
    }
}

/// Renderable navigation model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavModel {
    /// Ordered page tokens, anchors included.
    pub items: Vec<NavItem>,
    /// Whether the "next" button is enabled.
    pub can_go_next: bool,
    /// Whether the "previous" button is enabled.
    pub can_go_previous: bool,
    /// Index the model was computed for (after any lenient clamping).
    pub current: usize,
    /// Total page count the model was computed for.
    pub total: usize,
}

impl NavModel {
    /// Iterates the zero-based indices of all `Page` tokens in order.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().filter_map(|item| item.page_index())
    }

    /// Number of `Gap` tokens in the strip.
    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_gap()).count()
    }

    /// Whether `index` is shown as a numeric token.
    #[must_use]
    pub fn contains_page(&self, index: usize) -> bool {
        self.items.contains(&NavItem::Page(index))
    }
}
