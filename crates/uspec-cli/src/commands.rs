use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};
use uspec_config::Settings;
use uspec_core::{GenerationOutcome, GenerationRequest, TransformOptions, generate_wordlist};
use uspec_output::{SavedOutput, merge_files, save_merged, save_wordlist};

use uspec_cli::prompt::{InputSources, Prompter, read_keywords, split_keywords};

use crate::cli::{GenerateArgs, MergeArgs};

/// Minimum number of wordlists `merge` accepts.
const MIN_MERGE_FILES: usize = 2;

pub struct GenerateResult {
    pub outcome: GenerationOutcome,
    pub saved: SavedOutput,
}

pub fn run_generate(args: &GenerateArgs, settings: &Settings) -> Result<GenerateResult> {
    let span = info_span!("generate_command");
    let _guard = span.enter();

    let keywords = match &args.import {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open keyword file {}", path.display()))?;
            let keywords = read_keywords(BufReader::new(file))
                .with_context(|| format!("read keyword file {}", path.display()))?;
            debug!(path = %path.display(), count = keywords.len(), "imported keywords");
            Some(keywords)
        }
        None => args.keywords.as_deref().map(split_keywords),
    };
    let sources = InputSources {
        keywords,
        dates: args.dates.clone(),
        ranges: args.ranges.clone(),
        interactive: !args.no_prompt,
    };
    let inputs = Prompter::new(io::stdin().lock(), io::stdout())
        .collect(sources)
        .context("read input")?;

    let request = GenerationRequest {
        keywords: inputs.keywords,
        dates: inputs.dates,
        ranges: inputs.ranges,
        case_sensitive: args.case,
        reverse: args.reverse,
        transforms: TransformOptions {
            tails: args.tails,
            special_chars: args.special,
            leet: args.leet,
            capitalize: args.upper,
        },
    };
    println!("\n[+] Generating wordlist. This might take a while...");
    let outcome = generate_wordlist(&request, &settings.generator)?;

    let directory = args
        .output_dir
        .clone()
        .unwrap_or_else(|| settings.output.directory.clone());
    let saved = save_wordlist(&directory, &settings.output.output_file, &outcome.wordlist)?;
    Ok(GenerateResult { outcome, saved })
}

pub fn run_merge(args: &MergeArgs, settings: &Settings) -> Result<SavedOutput> {
    let span = info_span!("merge_command", files = args.files.len());
    let _guard = span.enter();

    if args.files.len() < MIN_MERGE_FILES {
        bail!(
            "at least {MIN_MERGE_FILES} wordlists are required to merge, got {}",
            args.files.len()
        );
    }
    println!("\n[+] Merging files...");
    let merged = merge_files(&args.files)?;
    let directory = args
        .output_dir
        .clone()
        .unwrap_or_else(|| settings.output.directory.clone());
    save_merged(&directory, &settings.output.merged_file, &merged)
}
