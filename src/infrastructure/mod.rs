//! Infrastructure layer for filesystem and environment interactions.
//!
//! Locates and loads the playground configuration file.

pub mod paths;

pub use paths::{default_config_path, expand_tilde};

use crate::domain::Result;
use crate::Config;

/// Loads configuration from an explicit path or the default location.
///
/// An explicit path must exist. The default path is optional: when it is
/// missing, the default configuration is returned.
///
/// # Errors
///
/// Returns an I/O error for an unreadable explicit path, or a config error for
/// malformed TOML.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    if let Some(path) = explicit {
        let path = expand_tilde(path);
        tracing::debug!(path = %path.display(), "loading config file");
        return Config::from_file(&path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "loading default config file");
            Config::from_file(&path)
        }
        _ => {
            tracing::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}
