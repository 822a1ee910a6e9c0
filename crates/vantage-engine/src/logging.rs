//! Logger setup for Vantage binaries.
//!
//! Library code only uses the `log` facade; a binary picks the backend once
//! through [`init_logging`].

use std::sync::Once;

use log::LevelFilter;

/// Environment variable read when no explicit filter is configured.
///
/// Takes precedence over `RUST_LOG`, so the resolver can be made verbose
/// without turning on every other crate in an embedding process.
pub const LOG_ENV: &str = "VANTAGE_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "vantage_engine=debug,wgpu=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,

    /// Level used when neither the config nor the environment sets a filter.
    ///
    /// `Warn` by default; wgpu is chatty at `info` while enumerating adapters.
    pub default_level: LevelFilter,

    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Filter string to apply, if any: the config first, then [`LOG_ENV`],
    /// then `RUST_LOG`. Blank values are skipped.
    fn filter(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.env_filter
            .clone()
            .into_iter()
            .chain(env(LOG_ENV))
            .chain(env("RUST_LOG"))
            .find(|f| !f.trim().is_empty())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main`, before reading the
/// host signals, so the GPU check's debug output is captured.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter(|key| std::env::var(key).ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(config.default_level),
        };

        builder.write_style(config.write_style);

        // An embedding host may already own the global logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
