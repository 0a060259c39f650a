//! Playground commands and interactive sessions.
//!
//! [`Playground`] backs the binary's subcommands: listing stories, rendering a
//! story or ad-hoc props, and driving a [`PlaySession`] from line-based input.
//! All methods return rendered text; the binary only does I/O.

use crate::app::{Event, PagerState, PaginationController};
use crate::calculator::PageRangeCalculator;
use crate::domain::{PaginationError, PaginationProps, PaginationState, Result};
use crate::stories::{Catalog, Story};
use crate::ui::{self, Size, Style};
use crate::Config;
use std::collections::BTreeMap;

/// Output format for the `render` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rendered navigation strip.
    #[default]
    Text,
    /// Pretty-printed `NavModel` JSON.
    Json,
}

/// Props and presentation options parsed from `key=value` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    pub props: PaginationProps,
    pub size: Size,
    pub format: OutputFormat,
}

impl RenderRequest {
    /// Parses `index`, `total`, `page_size`, `has_next`, `has_previous`, `size`
    /// and `format` strictly; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Config`] when `total` is missing or any
    /// present value fails to parse.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let index = parse_opt::<usize>(map, "index")?.unwrap_or(0);
        let total = parse_opt::<usize>(map, "total")?
            .ok_or_else(|| PaginationError::Config("missing required key 'total'".to_string()))?;

        let mut state = PaginationState::new(index, total);
        if let Some(page_size) = parse_opt::<usize>(map, "page_size")? {
            state = state.with_page_size(page_size);
        }

        let props = PaginationProps::new(state).with_availability(
            parse_opt::<bool>(map, "has_next")?.into(),
            parse_opt::<bool>(map, "has_previous")?.into(),
        );

        let size = map
            .get("size")
            .map(|raw| raw.parse::<Size>())
            .transpose()?
            .unwrap_or_default();

        let format = match map.get("format").map(|f| f.trim().to_ascii_lowercase()) {
            None => OutputFormat::Text,
            Some(f) if f == "text" => OutputFormat::Text,
            Some(f) if f == "json" => OutputFormat::Json,
            Some(other) => {
                return Err(PaginationError::Config(format!(
                    "unknown format '{other}', expected text or json"
                )))
            }
        };

        Ok(Self { props, size, format })
    }
}

fn parse_opt<T>(map: &BTreeMap<String, String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    map.get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| PaginationError::Config(format!("invalid value '{raw}' for '{key}': {e}")))
        })
        .transpose()
}

/// A line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Event),
    Help,
    Quit,
}

/// Help text for interactive sessions.
pub const PLAY_HELP: &str = "n: next  p: previous  f: first  l: last  <number>: go to page  h: help  q: quit";

/// Parses one line of interactive input.
///
/// Page numbers are one-based as displayed; `0` is not a page and returns
/// `None`.
///
/// # Examples
///
/// ```
/// use simple_ui_pagination::playground::{parse_command, Command};
/// use simple_ui_pagination::Event;
///
/// assert_eq!(parse_command("n"), Some(Command::Navigate(Event::Next)));
/// assert_eq!(parse_command(" 3 "), Some(Command::Navigate(Event::GoToPage(2))));
/// assert_eq!(parse_command("0"), None);
/// ```
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    Some(match line.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Navigate(Event::Next),
        "p" | "prev" | "previous" => Command::Navigate(Event::Previous),
        "f" | "first" => Command::Navigate(Event::First),
        "l" | "last" => Command::Navigate(Event::Last),
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => {
            let page = other.parse::<usize>().ok().filter(|page| *page >= 1)?;
            Command::Navigate(Event::GoToPage(page - 1))
        }
    })
}

/// Configured playground.
#[derive(Debug, Clone)]
pub struct Playground {
    calculator: PageRangeCalculator,
    catalog: Catalog,
    style: Style,
}

impl Playground {
    /// Builds a playground from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidConfiguration`] for an invalid window size.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            calculator: config.calculator()?,
            catalog: Catalog::builtin().with_stories(config.stories.iter().cloned()),
            style: Style { color: config.color },
        })
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn calculator(&self) -> PageRangeCalculator {
        self.calculator
    }

    /// One line per story: name and description.
    #[must_use]
    pub fn list(&self) -> String {
        let width = self
            .catalog
            .stories()
            .iter()
            .map(|story| story.name.len())
            .max()
            .unwrap_or(0);

        self.catalog
            .stories()
            .iter()
            .map(|story| format!("{:<width$}  {}", story.name, story.description))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders a story's initial state.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::UnknownStory`] or the story's validation error.
    pub fn show(&self, name: &str) -> Result<String> {
        let story = self.catalog.find(name)?;
        ui::render_story(story, self.calculator, None, self.style)
    }

    /// Renders ad-hoc props in the requested format.
    ///
    /// # Errors
    ///
    /// Returns the calculator's validation error for invalid props.
    pub fn render(&self, request: &RenderRequest) -> Result<String> {
        let state = PagerState::new(request.props, self.calculator)?;
        match request.format {
            OutputFormat::Text => ui::render(&state, request.size, self.style),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&state.nav_model()?)?),
        }
    }

    /// Starts an interactive session on a story.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::UnknownStory`] or the story's validation error.
    pub fn session(&self, name: &str, on_change: impl FnMut(usize) + 'static) -> Result<PlaySession> {
        let story = self.catalog.find(name)?.clone();
        let calculator = ui::story_calculator(&story, self.calculator)?;
        let controller = PaginationController::new(story.resolved_props()?, calculator)?.on_change(on_change);

        Ok(PlaySession {
            story,
            controller,
            style: self.style,
        })
    }
}

/// A story being navigated interactively.
#[derive(Debug)]
pub struct PlaySession {
    story: Story,
    controller: PaginationController,
    style: Style,
}

impl PlaySession {
    #[must_use]
    pub const fn controller(&self) -> &PaginationController {
        &self.controller
    }

    /// Renders the story at its current position.
    ///
    /// # Errors
    ///
    /// Returns the calculator's validation error for invalid props.
    pub fn render(&self) -> Result<String> {
        let calculator = self.controller.state().calculator;
        ui::render_story(&self.story, calculator, Some(self.controller.state()), self.style)
    }

    /// Dispatches a navigation event; returns whether to re-render.
    ///
    /// # Errors
    ///
    /// Propagates controller errors.
    pub fn navigate(&mut self, event: &Event) -> Result<bool> {
        self.controller.dispatch(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Availability;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn render_request_requires_total() {
        let err = RenderRequest::from_map(&map(&[("index", "2")])).unwrap_err();
        assert!(matches!(err, PaginationError::Config(_)));
    }

    #[test]
    fn render_request_parses_overrides() {
        let request = RenderRequest::from_map(&map(&[
            ("index", "3"),
            ("total", "12"),
            ("has_next", "false"),
            ("size", "large"),
            ("format", "json"),
        ]))
        .unwrap();
        assert_eq!(request.props.state, PaginationState::new(3, 12));
        assert_eq!(request.props.has_next, Availability::Explicit(false));
        assert_eq!(request.props.has_previous, Availability::Computed);
        assert_eq!(request.size, Size::Large);
        assert_eq!(request.format, OutputFormat::Json);
    }

    #[test]
    fn render_request_rejects_bad_numbers() {
        assert!(RenderRequest::from_map(&map(&[("total", "-1")])).is_err());
        assert!(RenderRequest::from_map(&map(&[("total", "4"), ("format", "xml")])).is_err());
    }

    #[test]
    fn json_output_lists_tokens() {
        let playground = Playground::new(&Config::default()).unwrap();
        let request = RenderRequest::from_map(&map(&[("total", "1"), ("format", "json")])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&playground.render(&request).unwrap()).unwrap();
        assert_eq!(json["items"][0]["kind"], "page");
        assert_eq!(json["items"][0]["label"], 1);
        assert_eq!(json["can_go_next"], false);
    }

    #[test]
    fn list_includes_every_story() {
        let playground = Playground::new(&Config::default()).unwrap();
        let listing = playground.list();
        for story in playground.catalog().stories() {
            assert!(listing.contains(&story.name));
        }
    }

    #[test]
    fn session_reports_changes_and_rerenders() {
        let playground = Playground::new(&Config::default()).unwrap();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let mut session = playground
            .session("interactive", move |index| sink.borrow_mut().push(index))
            .unwrap();

        assert!(session.navigate(&Event::Last).unwrap());
        assert!(!session.navigate(&Event::Next).unwrap());
        assert!(session.navigate(&Event::GoToPage(4)).unwrap());
        assert_eq!(*changes.borrow(), vec![9, 4]);
        assert!(session.render().unwrap().contains("Page 5 of 10"));
    }

    #[test]
    fn table_session_pages_rows() {
        let playground = Playground::new(&Config::default()).unwrap();
        let mut session = playground.session("TableExample", |_| {}).unwrap();
        session.navigate(&Event::Last).unwrap();
        let out = session.render().unwrap();
        assert!(out.contains("Showing 46 to 47 of 47 items"));
        assert!(out.contains("Item 47"));
    }

    #[test]
    fn commands_parse() {
        assert_eq!(parse_command("Q"), Some(Command::Quit));
        assert_eq!(parse_command("prev"), Some(Command::Navigate(Event::Previous)));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("x"), None);
    }
}
