//! Configuration structures.
//!
//! Configuration is loaded from environment variables. The debug flag is the
//! only knob that changes conversion behaviour; everything else is ambient.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Environment variable holding the process-wide debug flag.
pub const DEBUG_ENV: &str = "UFP_DEBUG";

/// Environment variable selecting the log format (`json` or plain).
pub const LOG_FORMAT_ENV: &str = "UFP_LOG_FORMAT";

static GLOBAL: OnceLock<Config> = OnceLock::new();

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Debug mode: keep unknown wire fields and validate every construction.
    #[serde(default)]
    pub debug: bool,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Build a config from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = lookup(DEBUG_ENV).map(|v| parse_flag(&v)).unwrap_or(false);
        let log_level = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());
        let json_logs = lookup(LOG_FORMAT_ENV)
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            debug,
            observability: ObservabilityConfig {
                log_level,
                json_logs,
            },
        }
    }

    /// Process-wide config, read from the environment on first access.
    pub fn global() -> &'static Config {
        GLOBAL.get_or_init(Config::from_env)
    }
}

/// Whether the process-wide debug flag is on.
pub fn is_debug() -> bool {
    Config::global().debug
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
