//! Wordlist file output.

use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use tracing::info;
use uspec_model::WordlistResult;

use crate::common::{SavedOutput, prepare_target, write_lines};

/// Writes `wordlist` to `<directory>/<now>_<file_name>`, sorted, one word per line.
pub fn save_wordlist(
    directory: &Path,
    file_name: &str,
    wordlist: &WordlistResult,
) -> Result<SavedOutput> {
    save_wordlist_at(directory, file_name, wordlist, &Local::now().naive_local())
}

/// Same as [`save_wordlist`] with an explicit timestamp.
pub fn save_wordlist_at(
    directory: &Path,
    file_name: &str,
    wordlist: &WordlistResult,
    stamp: &NaiveDateTime,
) -> Result<SavedOutput> {
    let path = prepare_target(directory, file_name, stamp)?;
    let lines = write_lines(&path, wordlist)?;
    info!(path = %path.display(), lines, "wrote wordlist");
    Ok(SavedOutput { path, lines })
}
