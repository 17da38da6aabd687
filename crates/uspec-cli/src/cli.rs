//! CLI argument definitions for uspec.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use uspec_config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(
    name = "uspec",
    version,
    about = "USPEC - generate targeted password wordlists",
    long_about = "Generate a password wordlist from keywords, exact dates and number \
                  ranges related to a target.\n\n\
                  Candidates are permuted, optionally extended with tails, special \
                  characters, leet substitutions and capitalization, and filtered to \
                  the configured length bounds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file.
    #[arg(
        short = 'f',
        long = "config",
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_FILE,
        global = true
    )]
    pub config: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a wordlist from keywords, dates and ranges.
    Generate(GenerateArgs),

    /// Merge two or more existing wordlists into one.
    Merge(MergeArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Replace letters with the configured leet substitutes.
    #[arg(short = 'l', long = "leet")]
    pub leet: bool,

    /// Append the configured special characters.
    #[arg(short = 's', long = "special")]
    pub special: bool,

    /// Append the configured tails.
    #[arg(short = 't', long = "tails")]
    pub tails: bool,

    /// Add reversed keywords.
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Treat keywords as case sensitive.
    #[arg(short = 'c', long = "case")]
    pub case: bool,

    /// Add a variant with the first letter capitalized.
    #[arg(short = 'u', long = "upper")]
    pub upper: bool,

    /// Read keywords from a file, one per line.
    #[arg(short = 'i', long = "import", value_name = "FILE", conflicts_with = "keywords")]
    pub import: Option<PathBuf>,

    /// Comma-separated keywords.
    #[arg(long = "keywords", value_name = "CSV")]
    pub keywords: Option<String>,

    /// Comma-separated exact dates (DD.MM.YYYY).
    #[arg(long = "dates", value_name = "CSV")]
    pub dates: Option<String>,

    /// Comma-separated number ranges (N-N).
    #[arg(long = "ranges", value_name = "CSV")]
    pub ranges: Option<String>,

    /// Never prompt; inputs not given as flags are empty.
    #[arg(long = "no-prompt")]
    pub no_prompt: bool,

    /// Output directory (default: the configured directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Wordlists to merge (at least two).
    #[arg(value_name = "WORDLIST", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Output directory (default: the configured directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
