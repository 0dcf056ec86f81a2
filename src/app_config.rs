use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;
use crate::identification::statistical::DEFAULT_MIN_LETTERS;
use crate::language_utils::{LanguageCode, validate_language_pair};
use crate::validation::NewlineMode;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code
    pub source_language: String,

    /// Target language code
    pub target_language: String,

    /// Detector settings
    #[serde(default)]
    pub checks: ChecksConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Detector settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChecksConfig {
    /// Whether a line break anywhere, or only in first position, is reported
    #[serde(default)]
    pub newline_mode: NewlineMode,

    /// Letters a text needs before its language is identified
    #[serde(default = "default_min_identification_letters")]
    pub min_identification_letters: usize,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            newline_mode: NewlineMode::default(),
            min_identification_letters: default_min_identification_letters(),
        }
    }
}

/// Report output settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Suffix appended to the input path to name the report
    #[serde(default = "default_output_suffix")]
    pub suffix: String,

    /// Whether the report starts with a header row
    #[serde(default = "default_true")]
    pub write_header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_output_suffix(),
            write_header: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_min_identification_letters() -> usize {
    DEFAULT_MIN_LETTERS
}

fn default_output_suffix() -> String {
    ".errors.tsv".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the language pair and return it parsed.
    ///
    /// Fails when either code is unsupported or both are the same.
    pub fn validate(&self) -> Result<(LanguageCode, LanguageCode), ConfigError> {
        validate_language_pair(&self.source_language, &self.target_language)
    }

    /// Load a configuration file, creating it with defaults when missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {:?}", path))?;

        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "hi".to_string(),
            target_language: "ur".to_string(),
            checks: ChecksConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
