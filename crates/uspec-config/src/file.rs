#![deny(unsafe_code)]

//! On-disk layout of `uspec.toml`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::settings::{LogFileMode, LogLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub options: OptionsSection,
    /// Source character to comma-separated substitutes.
    pub leet: BTreeMap<String, String>,
    pub chars: CharsSection,
    pub output: OutputSection,
    #[serde(default)]
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsSection {
    pub length_min: usize,
    pub length_max: usize,
    pub tails: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharsSection {
    pub special_chars: String,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub output_file: String,
    pub merged_file: String,
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub enabled: bool,
    pub log_file: PathBuf,
    #[serde(default)]
    pub mode: LogFileMode,
    #[serde(default)]
    pub level: LogLevel,
}
