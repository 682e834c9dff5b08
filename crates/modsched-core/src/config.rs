// Rust guideline compliant 2026-10-16

//! Configuration management for modsched.

use crate::message::{DATE_PLACEHOLDER, FROM_PLACEHOLDER, TO_PLACEHOLDER};
use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the configuration file.
pub const CONFIG_FILE: &str = "modsched.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for modsched behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Violation message with `%date`, `%from` and `%to` placeholders.
    #[serde(default = "default_message_template")]
    pub message_template: String,

    /// chrono strftime format used for `%date`.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Replacement for `%date` when a transition has no timestamp.
    #[serde(default = "default_unscheduled_label")]
    pub unscheduled_label: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level: error, warn, info or debug.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_message_template() -> String {
    "Scheduled transition on %date from %from to %to is not allowed.".to_string()
}

/// RFC 2822 layout.
fn default_date_format() -> String {
    "%a, %d %b %Y %H:%M:%S %z".to_string()
}

fn default_unscheduled_label() -> String {
    "an unscheduled time".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_template: default_message_template(),
            date_format: default_date_format(),
            unscheduled_label: default_unscheduled_label(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from a directory and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file `modsched.toml` in `dir`
    /// 3. Environment variables with `MODSCHED_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_file(&dir.join(CONFIG_FILE))
    }

    /// Loads configuration from an explicit file path.
    ///
    /// A missing file yields the defaults; environment overrides and
    /// validation apply as in [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `MODSCHED_MESSAGE_TEMPLATE`
    /// - `MODSCHED_DATE_FORMAT`
    /// - `MODSCHED_UNSCHEDULED_LABEL`
    /// - `MODSCHED_OUTPUT_FORMAT` - json/table/plain
    /// - `MODSCHED_LOG_LEVEL` - error/warn/info/debug
    ///
    /// # Errors
    ///
    /// Returns an error if the output format value is unknown.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("MODSCHED_MESSAGE_TEMPLATE") {
            self.message_template = val;
        }

        if let Ok(val) = std::env::var("MODSCHED_DATE_FORMAT") {
            self.date_format = val;
        }

        if let Ok(val) = std::env::var("MODSCHED_UNSCHEDULED_LABEL") {
            self.unscheduled_label = val;
        }

        if let Ok(val) = std::env::var("MODSCHED_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "MODSCHED_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("MODSCHED_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - message_template lacks one of `%date`, `%from`, `%to`
    /// - date_format is empty or not a valid strftime format
    /// - log_level is not error, warn, info or debug
    fn validate(&self) -> Result<()> {
        for placeholder in [DATE_PLACEHOLDER, FROM_PLACEHOLDER, TO_PLACEHOLDER] {
            if !self.message_template.contains(placeholder) {
                return Err(Error::Config(format!(
                    "message_template must contain {}",
                    placeholder
                )));
            }
        }

        if self.date_format.is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(Error::Config(format!(
                "date_format is not a valid strftime format: {:?}",
                self.date_format
            )));
        }

        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "error" | "warn" | "info" | "debug"
        ) {
            return Err(Error::Config(format!(
                "log_level must be error, warn, info or debug, got {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration as `modsched.toml` in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}
