#![deny(unsafe_code)]

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uspec_model::GeneratorConfig;

/// Directory used for generated and merged wordlists when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// How an existing log file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFileMode {
    #[default]
    Append,
    Truncate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// File name suffix for generated wordlists.
    pub output_file: String,
    /// File name suffix for merged wordlists.
    pub merged_file: String,
    /// Directory both kinds of output are written to.
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub enabled: bool,
    pub log_file: PathBuf,
    pub mode: LogFileMode,
    pub level: LogLevel,
}

/// Everything read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub output: OutputSettings,
    /// `None` when the file has no `[logging]` section.
    pub logging: Option<LoggingSettings>,
}
