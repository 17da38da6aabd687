use std::fmt;

use thiserror::Error;

/// Input category a format error was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Dates,
    Ranges,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Dates => f.write_str("exact dates"),
            InputKind::Ranges => f.write_str("range"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UspecError {
    /// Date or range input was supplied but produced no valid entries.
    #[error("\"{kind}\" format faulty: {detail}")]
    InvalidFormat { kind: InputKind, detail: String },
    /// Neither keywords nor date/range tokens are available.
    #[error("not enough data provided to generate a wordlist")]
    InsufficientInput,
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl UspecError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, UspecError>;
