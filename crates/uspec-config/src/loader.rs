#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use uspec_model::{GeneratorConfig, LeetMap, UspecError, split_csv};

use crate::error::ConfigError;
use crate::file::{ConfigFile, LoggingSection};
use crate::settings::{DEFAULT_OUTPUT_DIR, LoggingSettings, OutputSettings, Settings};

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "uspec.toml";

/// Reads and validates the configuration file at `path`.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    parse_settings(&contents, path)
}

/// Parses configuration text; `path` is only used in error messages.
pub fn parse_settings(contents: &str, path: &Path) -> Result<Settings, ConfigError> {
    let file: ConfigFile = toml::from_str(contents).map_err(|e| ConfigError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;
    build_settings(file)
}

fn build_settings(file: ConfigFile) -> Result<Settings, ConfigError> {
    let leet = build_leet_map(&file.leet)?;
    let generator = GeneratorConfig::new(file.options.length_min, file.options.length_max)?
        .with_tails(split_csv(&file.options.tails))
        .with_leet(leet)
        .with_special_chars(split_csv(&file.chars.special_chars), file.chars.required);

    let output = OutputSettings {
        output_file: file.output.output_file.trim().to_string(),
        merged_file: file.output.merged_file.trim().to_string(),
        directory: file
            .output
            .directory
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    };
    if output.output_file.is_empty() || output.merged_file.is_empty() {
        return Err(UspecError::Configuration(
            "output_file and merged_file must not be empty".to_string(),
        )
        .into());
    }

    Ok(Settings {
        generator,
        output,
        logging: file.logging.map(logging_settings),
    })
}

fn build_leet_map(entries: &BTreeMap<String, String>) -> Result<LeetMap, ConfigError> {
    let mut map = LeetMap::new();
    for (key, substitutes) in entries {
        let mut chars = key.chars();
        let (Some(source), None) = (chars.next(), chars.next()) else {
            return Err(ConfigError::InvalidLeetKey { key: key.clone() });
        };
        map.insert(source, split_csv(substitutes));
    }
    Ok(map)
}

fn logging_settings(section: LoggingSection) -> LoggingSettings {
    LoggingSettings {
        enabled: section.enabled,
        log_file: section.log_file,
        mode: section.mode,
        level: section.level,
    }
}
