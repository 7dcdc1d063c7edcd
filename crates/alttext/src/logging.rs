//! Tracing subscriber setup.
//!
//! Everything is written to stderr so `alttext generate` can keep stdout for
//! the alt text itself. `RUST_LOG`, when set, beats every other level source.

use alttext_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output encoding for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Resolved logging settings: `[logging]` section plus CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// `--verbose` forces `debug`; `--json-logs` forces JSON.
    pub fn resolve(config: &Config, verbose: bool, json_logs: bool) -> Self {
        let level = if verbose {
            "debug".to_string()
        } else {
            config.logging.level.clone()
        };
        let format = if json_logs || config.logging.format == "json" {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        };
        Self { level, format }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Install the global subscriber. Call once, before any request is served.
pub fn init(settings: &LogSettings) {
    let (json, pretty) = match settings.format {
        LogFormat::Json => (Some(fmt::layer().json().with_writer(std::io::stderr)), None),
        LogFormat::Pretty => (
            None,
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(settings.filter())
        .with(json)
        .with(pretty)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_values_used_without_flags() {
        let mut config = Config::default();
        config.logging.level = "warn".to_string();
        config.logging.format = "json".to_string();

        let settings = LogSettings::resolve(&config, false, false);
        assert_eq!(settings.level, "warn");
        assert_eq!(settings.format, LogFormat::Json);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::default();
        let settings = LogSettings::resolve(&config, true, true);
        assert_eq!(settings.level, "debug");
        assert_eq!(settings.format, LogFormat::Json);
    }

    #[test]
    fn test_pretty_is_default() {
        let settings = LogSettings::resolve(&Config::default(), false, false);
        assert_eq!(settings.format, LogFormat::Pretty);
    }
}
