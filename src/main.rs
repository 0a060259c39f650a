//! Pagination playground binary.
//!
//! Thin I/O wrapper around [`simple_ui_pagination::Playground`]: parses
//! arguments, loads configuration, and prints rendered output.
//!
//! # Usage
//!
//! ```text
//! simple-ui-pagination list
//! simple-ui-pagination show MiddlePage [color=true]
//! simple-ui-pagination render index=4 total=20 [page_size=5] [has_next=false] [format=json]
//! simple-ui-pagination play Interactive
//! ```
//!
//! Every `key=value` argument is an option; everything else is positional.
//! `config=<path>` selects a config file, otherwise
//! `~/.config/simple-ui/pagination.toml` is used when present. Remaining
//! options override values from the file.
//!
//! # Interactive Keys
//!
//! - `n` / `p`: next / previous page
//! - `f` / `l`: first / last page
//! - `<number>`: go to a one-based page
//! - `h`: help, `q`: quit

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use simple_ui_pagination::infrastructure::load_config;
use simple_ui_pagination::playground::{parse_command, Command, RenderRequest, PLAY_HELP};
use simple_ui_pagination::{initialize, observability, Config, Playground, Result};

const USAGE: &str = "usage: simple-ui-pagination <list | show <story> | render key=value... | play <story>> [config=<path>] [window_size=N] [index_policy=strict|lenient] [color=true|false] [trace_level=LEVEL]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (positional, options) = split_args(&args);

    let config = match load_config(options.get("config").map(String::as_str)) {
        Ok(config) => config.with_overrides(&options),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    observability::init_tracing(&config);

    match run(&positional, &options, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Splits `key=value` options from positional arguments.
fn split_args(args: &[String]) -> (Vec<&str>, BTreeMap<String, String>) {
    let mut positional = Vec::new();
    let mut options = BTreeMap::new();
    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                options.insert(key.trim().to_string(), value.to_string());
            }
            _ => positional.push(arg.as_str()),
        }
    }
    (positional, options)
}

fn run(positional: &[&str], options: &BTreeMap<String, String>, config: &Config) -> Result<()> {
    let _span = tracing::debug_span!("run", command = ?positional.first()).entered();
    let playground = initialize(config)?;

    match positional {
        ["list"] => println!("{}", playground.list()),
        ["show", name] => println!("{}", playground.show(name)?),
        ["render"] => println!("{}", playground.render(&RenderRequest::from_map(options)?)?),
        ["play", name] => play(&playground, name)?,
        _ => println!("{USAGE}"),
    }
    Ok(())
}

fn play(playground: &Playground, name: &str) -> Result<()> {
    let mut session = playground.session(name, |index| {
        println!("→ page changed to {} (index {index})", index + 1);
    })?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}\n\n{PLAY_HELP}", session.render()?);
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => println!("{PLAY_HELP}"),
            Some(Command::Navigate(event)) => {
                if session.navigate(&event)? {
                    println!("{}", session.render()?);
                } else {
                    println!("(no change)");
                }
            }
            None if line.trim().is_empty() => {}
            None => println!("unknown command '{}'; {PLAY_HELP}", line.trim()),
        }
        print!("> ");
        stdout.flush()?;
    }

    println!();
    Ok(())
}
