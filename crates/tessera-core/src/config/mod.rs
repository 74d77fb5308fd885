mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

pub use loader::{config_dir, config_path, load, load_from, try_load_from};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration for the `tessera` CLI.
///
/// Loaded from `~/.config/tessera/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Diagnostic logging settings.
    pub log: LogConfig,
    /// How results are printed.
    pub output: OutputConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: "trace", "debug", "info", "warn", or "error".
    pub level: String,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Rendering used for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

impl Config {
    /// Normalises the log level to a known lowercase name.
    ///
    /// Unknown levels fall back to "warn".
    pub fn validate(&mut self) {
        let level = self.log.level.trim().to_ascii_lowercase();
        self.log.level = if LOG_LEVELS.contains(&level.as_str()) {
            level
        } else {
            LogConfig::default().level
        };
    }
}
