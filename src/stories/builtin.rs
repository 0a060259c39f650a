//! Built-in stories previewing each pagination state.

use super::{Story, TableFixture};
use crate::domain::{Availability, PaginationProps, PaginationState};
use crate::ui::Size;

const TABLE_ITEMS: usize = 47;
const TABLE_PAGE_SIZE: usize = 5;

fn story(name: &str, description: &str, state: PaginationState) -> Story {
    Story {
        name: name.to_string(),
        description: description.to_string(),
        props: PaginationProps::new(state),
        size: Size::Medium,
        window_size: None,
        table: None,
    }
}

fn explicit(mut story: Story, has_next: bool, has_previous: bool) -> Story {
    story.props = story.props.with_availability(
        Availability::Explicit(has_next),
        Availability::Explicit(has_previous),
    );
    story
}

fn sized(mut story: Story, size: Size) -> Story {
    story.size = size;
    story
}

/// Stories shipped with the playground, in display order.
#[must_use]
pub fn builtin_stories() -> Vec<Story> {
    let first_of_ten = PaginationState::new(0, 10);

    vec![
        explicit(
            story("Default", "First of ten pages with default props", first_of_ten),
            true,
            false,
        ),
        explicit(
            sized(story("Small", "Compact arrow-only buttons", first_of_ten), Size::Small),
            true,
            false,
        ),
        explicit(
            story("Medium", "Short button labels", first_of_ten),
            true,
            false,
        ),
        explicit(
            sized(story("Large", "Full labels with first/last buttons", first_of_ten), Size::Large),
            true,
            false,
        ),
        explicit(
            story("MiddlePage", "Current page in the middle, gaps on both sides", PaginationState::new(5, 10)),
            true,
            true,
        ),
        explicit(
            story("LastPage", "Last page, next disabled", PaginationState::new(9, 10)),
            false,
            true,
        ),
        explicit(
            story("SinglePage", "Only one page, both directions disabled", PaginationState::new(0, 1)),
            false,
            false,
        ),
        explicit(
            story("WithPageSize", "Five items per page", first_of_ten.with_page_size(5)),
            true,
            false,
        ),
        sized(
            story(
                "Interactive",
                "Availability follows the current page; try `play Interactive`",
                first_of_ten.with_page_size(5),
            ),
            Size::Small,
        ),
        Story {
            table: Some(TableFixture {
                total_items: TABLE_ITEMS,
            }),
            ..sized(
                story(
                    "TableExample",
                    "Paged table of 47 mock items, five per page",
                    PaginationState::new(0, TABLE_ITEMS.div_ceil(TABLE_PAGE_SIZE))
                        .with_page_size(TABLE_PAGE_SIZE),
                ),
                Size::Small,
            )
        },
    ]
}
