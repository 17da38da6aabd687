//! uspec wordlist generator CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use uspec_cli::logging::{LogConfig, LogFormat, init_logging};
use uspec_config::{LogFileMode, Settings, load_settings};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_generate, run_merge};
use crate::summary::{print_generation_summary, print_merge_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();

    let settings = match load_settings(&cli.config) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    };
    let log_config = log_config_from_cli(&cli, &settings);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match &cli.command {
        Command::Generate(args) => match run_generate(args, &settings) {
            Ok(result) => {
                print_generation_summary(&result);
                0
            }
            Err(error) => {
                tracing::error!(%error, "generation failed");
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Merge(args) => match run_merge(args, &settings) {
            Ok(saved) => {
                print_merge_summary(&saved);
                0
            }
            Err(error) => {
                tracing::error!(%error, "merge failed");
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Layer CLI flags over the `[logging]` section of the configuration file.
fn log_config_from_cli(cli: &Cli, settings: &Settings) -> LogConfig {
    let mut config = match &settings.logging {
        Some(logging) => LogConfig::from_settings(logging),
        None => LogConfig::default().with_level(cli.verbosity.tracing_level_filter()),
    };
    if cli.verbosity.is_present() {
        config = config
            .with_level(cli.verbosity.tracing_level_filter())
            .without_env_filter();
    }
    if let Some(level) = cli.log_level {
        let level = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
        config = config.with_level(level).without_env_filter();
    }
    config = config.with_format(match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    });
    if let Some(path) = &cli.log_file {
        config = config
            .with_log_file(Some(path.clone()), LogFileMode::Append)
            .with_timestamps(true);
    }
    let to_file = config.log_file.is_some();
    config.with_ansi(match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => !to_file && io::stderr().is_terminal(),
    })
}
