use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Script parsing options
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// SRT output options
    #[serde(default)]
    pub srt: SrtConfig,

    /// Conversion validation options
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Options controlling narration text cleanup during parsing
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ParsingConfig {
    /// Replace "/" pause marks with spaces
    #[serde(default = "default_true")]
    pub remove_slashes: bool,

    /// Replace "." with spaces
    #[serde(default)]
    pub remove_periods: bool,

    /// Keep parenthetical instructions inline in the narration text
    #[serde(default)]
    pub include_brackets: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        ParsingConfig {
            remove_slashes: true,
            remove_periods: false,
            include_brackets: false,
        }
    }
}

/// Options controlling SRT rendering
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct SrtConfig {
    /// Maximum characters per display line
    #[serde(default = "default_max_chars_per_line")]
    pub max_chars_per_line: usize,

    /// Break display lines at sentence ends
    #[serde(default = "default_true")]
    pub break_on_period: bool,

    /// Duration of the final subtitle, which has no successor (ms)
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
}

impl Default for SrtConfig {
    fn default() -> Self {
        SrtConfig {
            max_chars_per_line: default_max_chars_per_line(),
            break_on_period: true,
            default_duration_ms: default_duration_ms(),
        }
    }
}

/// Options controlling the conversion validator
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ValidationConfig {
    /// Whether validation runs after each conversion
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether the rendered report is persisted next to the SRT
    #[serde(default = "default_true")]
    pub save_report: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            enabled: true,
            save_report: true,
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

fn default_true() -> bool {
    true
}

fn default_max_chars_per_line() -> usize {
    40
}

fn default_duration_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            parsing: ParsingConfig::default(),
            srt: SrtConfig::default(),
            validation: ValidationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to open config file: {:?}", path.as_ref()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.srt.max_chars_per_line == 0 {
            return Err(anyhow!("srt.max_chars_per_line must be greater than zero"));
        }
        if self.srt.default_duration_ms == 0 {
            return Err(anyhow!("srt.default_duration_ms must be greater than zero"));
        }
        Ok(())
    }
}
