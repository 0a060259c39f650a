//! Story catalog for the pagination playground.
//!
//! A [`Story`] is a named set of props previewing one state of the pagination
//! strip. The [`Catalog`] holds the built-in stories plus any defined in the
//! configuration file.
//!
//! # TOML Format
//!
//! ```toml
//! [[stories]]
//! name = "Huge"
//! description = "Deep inside a long result set"
//! index = 40
//! total = 100
//! size = "large"
//! window_size = 9
//!
//! [[stories]]
//! name = "Orders"
//! index = 0
//! total = 1
//! page_size = 25
//! table = { total_items = 310 }
//! ```
//!
//! `has_next` / `has_previous` may be set to force button availability; when
//! omitted, availability follows the current page.

mod builtin;
pub mod table;

pub use builtin::builtin_stories;

use crate::calculator::total_pages;
use crate::domain::{PaginationError, PaginationProps, Result};
use crate::ui::Size;
use serde::{Deserialize, Serialize};

/// One previewable pagination state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Display name, matched case-insensitively.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Initial props.
    #[serde(flatten)]
    pub props: PaginationProps,

    #[serde(default)]
    pub size: Size,

    /// Overrides the configured window size for this story.
    #[serde(default)]
    pub window_size: Option<usize>,

    /// Mock table paged alongside the strip.
    #[serde(default)]
    pub table: Option<TableFixture>,
}

/// Mock data source for a table story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFixture {
    /// Number of mock items. The story's page count is derived from this.
    pub total_items: usize,
}

impl Story {
    /// Props with the page count derived from the table fixture, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidConfiguration`] when a table story has
    /// a zero page size.
    pub fn resolved_props(&self) -> Result<PaginationProps> {
        let mut props = self.props;
        if let Some(table) = self.table {
            props.state.total = total_pages(table.total_items, props.state.page_size)?;
        }
        Ok(props)
    }
}

/// Ordered collection of stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    stories: Vec<Story>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog with only the built-in stories.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            stories: builtin_stories(),
        }
    }

    /// Adds stories, replacing existing ones with the same name in place.
    #[must_use]
    pub fn with_stories(mut self, extra: impl IntoIterator<Item = Story>) -> Self {
        for story in extra {
            match self.position(&story.name) {
                Some(pos) => {
                    tracing::debug!(story = %story.name, "replacing built-in story");
                    self.stories[pos] = story;
                }
                None => self.stories.push(story),
            }
        }
        self
    }

    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Looks up a story by case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::UnknownStory`] if no story matches.
    pub fn find(&self, name: &str) -> Result<&Story> {
        self.position(name)
            .map(|pos| &self.stories[pos])
            .ok_or_else(|| PaginationError::UnknownStory(name.to_string()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.stories
            .iter()
            .position(|story| story.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Availability, PaginationState};

    #[test]
    fn builtin_last_page_matches_original_args() {
        let catalog = Catalog::builtin();
        let story = catalog.find("lastpage").unwrap();
        assert_eq!(story.props.state, PaginationState::new(9, 10));
        assert_eq!(story.props.has_next, Availability::Explicit(false));
        assert_eq!(story.props.has_previous, Availability::Explicit(true));
    }

    #[test]
    fn unknown_story_is_an_error() {
        let err = Catalog::builtin().find("Nope").unwrap_err();
        assert!(matches!(err, PaginationError::UnknownStory(name) if name == "Nope"));
    }

    #[test]
    fn table_story_derives_total() {
        let catalog = Catalog::builtin();
        let props = catalog.find("TableExample").unwrap().resolved_props().unwrap();
        assert_eq!(props.state.total, 10);
        assert_eq!(props.state.page_size, 5);
    }

    #[test]
    fn extra_stories_replace_by_name() {
        let mut custom = Catalog::builtin().find("Default").unwrap().clone();
        custom.name = "default".to_string();
        custom.props.state.index = 4;
        let builtin_len = Catalog::builtin().stories().len();

        let catalog = Catalog::builtin().with_stories([custom]);
        assert_eq!(catalog.stories().len(), builtin_len);
        assert_eq!(catalog.stories()[0].props.state.index, 4);
    }

    #[test]
    fn story_parses_from_toml() {
        let story: Story = toml::from_str(
            r#"
            name = "Huge"
            index = 40
            total = 100
            size = "large"
            has_next = false
            table = { total_items = 310 }
            "#,
        )
        .unwrap();
        assert_eq!(story.size, Size::Large);
        assert_eq!(story.props.state.page_size, 10);
        assert_eq!(story.props.has_next, Availability::Explicit(false));
        assert_eq!(story.props.has_previous, Availability::Computed);
        assert_eq!(story.resolved_props().unwrap().state.total, 31);
    }
}
