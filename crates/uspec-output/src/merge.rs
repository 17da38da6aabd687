//! Merging existing wordlists into one sorted, deduplicated file.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::common::{SavedOutput, prepare_target, write_lines};

/// Unions the lines of every reader.
///
/// Line terminators (`\n` or `\r\n`) are stripped and empty lines dropped;
/// other whitespace is kept as part of the entry.
pub fn merge_sources<R, I>(readers: I) -> Result<BTreeSet<String>>
where
    R: BufRead,
    I: IntoIterator<Item = R>,
{
    let mut merged = BTreeSet::new();
    for reader in readers {
        for line in reader.lines() {
            let line = line.context("read wordlist line")?;
            if !line.is_empty() {
                merged.insert(line);
            }
        }
    }
    Ok(merged)
}

/// Reads and unions the wordlists at `paths`.
pub fn merge_files(paths: &[PathBuf]) -> Result<BTreeSet<String>> {
    let mut merged = BTreeSet::new();
    for path in paths {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let entries = merge_sources([BufReader::new(file)])
            .with_context(|| format!("read {}", path.display()))?;
        debug!(path = %path.display(), entries = entries.len(), "read wordlist");
        merged.extend(entries);
    }
    Ok(merged)
}

/// Writes merged entries to `<directory>/<now>_<file_name>`.
pub fn save_merged(
    directory: &Path,
    file_name: &str,
    merged: &BTreeSet<String>,
) -> Result<SavedOutput> {
    save_merged_at(directory, file_name, merged, &Local::now().naive_local())
}

/// Same as [`save_merged`] with an explicit timestamp.
pub fn save_merged_at(
    directory: &Path,
    file_name: &str,
    merged: &BTreeSet<String>,
    stamp: &NaiveDateTime,
) -> Result<SavedOutput> {
    let path = prepare_target(directory, file_name, stamp)?;
    let lines = write_lines(&path, merged)?;
    info!(path = %path.display(), lines, "wrote merged wordlist");
    Ok(SavedOutput { path, lines })
}
