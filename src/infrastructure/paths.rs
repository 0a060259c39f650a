//! Configuration file locations.
//!
//! Resolves the playground's config file following the XDG base directory
//! convention and expands `~` in user-supplied paths.

use std::env;
use std::path::PathBuf;

/// Directory name under the config root.
const APP_DIR: &str = "simple-ui";

/// Config file name inside [`APP_DIR`].
const CONFIG_FILE: &str = "pagination.toml";

/// Returns the default config file path.
///
/// Uses `$XDG_CONFIG_HOME/simple-ui/pagination.toml`, falling back to
/// `$HOME/.config/simple-ui/pagination.toml`. Returns `None` when neither
/// variable is set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_root(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"))
        .map(|root| root.join(APP_DIR).join(CONFIG_FILE))
}

fn config_root(xdg: Option<std::ffi::OsString>, home: Option<std::ffi::OsString>) -> Option<PathBuf> {
    xdg.filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.filter(|dir| !dir.is_empty()).map(|h| PathBuf::from(h).join(".config")))
}

/// Expands a leading `~` to `$HOME`.
///
/// Paths without a leading tilde, or a tilde with no `HOME` set, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use simple_ui_pagination::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/pagination.toml").to_str(), Some("/etc/pagination.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, env::var_os("HOME").map(PathBuf::from))
}

fn expand_with_home(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
