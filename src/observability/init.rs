//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the config names one.
const DEFAULT_LEVEL: &str = "info";

/// Builds the filter from `RUST_LOG`, then `config.trace_level`, then the default.
///
/// An unparseable `trace_level` falls back to the default rather than failing.
#[must_use]
pub fn resolve_filter(config: &Config) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs a stderr `fmt` subscriber filtered per [`resolve_filter`].
///
/// Idempotent: only the first call in a process takes effect.
///
/// # Example
///
/// ```rust
/// use simple_ui_pagination::observability::init_tracing;
/// use simple_ui_pagination::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let subscriber = tracing_subscriber::registry()
        .with(resolve_filter(config))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
