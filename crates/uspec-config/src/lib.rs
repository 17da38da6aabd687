#![deny(unsafe_code)]

pub mod error;
pub mod file;
pub mod loader;
pub mod settings;

pub use crate::error::ConfigError;
pub use crate::loader::{DEFAULT_CONFIG_FILE, load_settings, parse_settings};
pub use crate::settings::{
    DEFAULT_OUTPUT_DIR, LogFileMode, LogLevel, LoggingSettings, OutputSettings, Settings,
};
