//! Date and numeric range expansion into permutation tails.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use uspec_model::{InputKind, Result, TokenSet, UspecError};

use crate::permutation::bounded_permutations;

/// `DD.MM.YYYY` with day 01-31 and month 01-12.
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.([0-9]{4})$")
        .expect("Invalid date regex")
});

/// `N-N` with each bound 0-9999.
static RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,4})-([0-9]{1,4})$").expect("Invalid range regex"));

/// Year spellings derived from a four-digit year: `1995`, `995`, `199`, `95`.
pub fn year_variants(year: &str) -> [&str; 4] {
    [year, &year[1..4], &year[..3], &year[2..4]]
}

/// Expands comma-separated `DD.MM.YYYY` dates into tail tokens.
///
/// For every valid date and every year variant, each arrangement of one to
/// three parts out of `{day, month, year}` is added. Invalid entries are
/// skipped.
///
/// # Errors
///
/// Returns [`UspecError::InvalidFormat`] when no entry is a valid date.
pub fn expand_dates(input: &str) -> Result<TokenSet> {
    let dates: BTreeSet<(&str, &str, &str)> = input
        .split(',')
        .filter_map(|entry| {
            let caps = DATE_REGEX.captures(entry.trim())?;
            Some((
                caps.get(1)?.as_str(),
                caps.get(2)?.as_str(),
                caps.get(3)?.as_str(),
            ))
        })
        .collect();

    if dates.is_empty() {
        return Err(UspecError::InvalidFormat {
            kind: InputKind::Dates,
            detail: format!("no entry of {input:?} matches DD.MM.YYYY"),
        });
    }

    let mut tokens = TokenSet::new();
    for (day, month, year) in &dates {
        for variant in year_variants(year) {
            let parts = [*day, *month, variant];
            for r in 1..=parts.len() {
                for joined in bounded_permutations(parts, r, None) {
                    tokens.insert_str(joined);
                }
            }
            for part in parts {
                tokens.insert_str(part);
            }
        }
    }
    debug!(
        date_count = dates.len(),
        token_count = tokens.len(),
        "expanded dates"
    );
    Ok(tokens)
}

/// Expands comma-separated `A-B` ranges into every integer of `[A, B]`.
///
/// Entries that do not match `N-N` are skipped.
///
/// # Errors
///
/// Returns [`UspecError::InvalidFormat`] when an entry has `A > B`, or when no
/// entry matches at all.
pub fn expand_ranges(input: &str) -> Result<TokenSet> {
    let mut tokens = TokenSet::new();
    let mut matched = 0usize;
    for entry in input.split(',') {
        let entry = entry.trim();
        let Some(caps) = RANGE_REGEX.captures(entry) else {
            continue;
        };
        let (Ok(start), Ok(end)) = (caps[1].parse::<u16>(), caps[2].parse::<u16>()) else {
            continue;
        };
        if start > end {
            return Err(UspecError::InvalidFormat {
                kind: InputKind::Ranges,
                detail: format!("lower bound exceeds upper bound in {entry:?}"),
            });
        }
        matched += 1;
        for value in start..=end {
            tokens.insert_str(value.to_string());
        }
    }

    if tokens.is_empty() {
        return Err(UspecError::InvalidFormat {
            kind: InputKind::Ranges,
            detail: format!("no entry of {input:?} matches N-N"),
        });
    }
    debug!(
        range_count = matched,
        token_count = tokens.len(),
        "expanded ranges"
    );
    Ok(tokens)
}
