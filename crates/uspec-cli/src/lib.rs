//! CLI library components for the uspec wordlist generator.

pub mod logging;
pub mod prompt;
