//! Shared utilities for writing output files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

/// Prefix format for output file names, e.g. `2024-03-09_14-05-33`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// A file written by the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedOutput {
    pub path: PathBuf,
    /// Number of entries written, one per line.
    pub lines: usize,
}

/// Ensure the output directory exists.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))
}

/// `<timestamp>_<name>` for the given local time.
pub fn timestamped_name(stamp: &NaiveDateTime, name: &str) -> String {
    format!("{}_{name}", stamp.format(TIMESTAMP_FORMAT))
}

/// Writes each entry on its own line, replacing any existing file.
///
/// Returns the number of lines written.
pub fn write_lines<'a, I>(path: &Path, entries: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a String>,
{
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let mut lines = 0usize;
    for entry in entries {
        writeln!(writer, "{entry}").with_context(|| format!("write {}", path.display()))?;
        lines += 1;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(lines)
}

/// Creates `directory` and returns the timestamped path for `file_name` in it.
pub(crate) fn prepare_target(
    directory: &Path,
    file_name: &str,
    stamp: &NaiveDateTime,
) -> Result<PathBuf> {
    ensure_output_dir(directory)?;
    Ok(directory.join(timestamped_name(stamp, file_name)))
}
