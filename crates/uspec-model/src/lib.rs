//! Core data types shared by the USPEC wordlist generator crates.

pub mod config;
pub mod error;
pub mod token;
pub mod wordlist;

pub use config::{GeneratorConfig, LeetMap, split_csv};
pub use error::{InputKind, Result, UspecError};
pub use token::{Token, TokenSet, char_len};
pub use wordlist::{GenerationReport, WordlistResult};
