//! Final length filter and capitalization.

use std::collections::BTreeSet;

use uspec_model::GeneratorConfig;

/// Keeps the unique candidates whose length lies in `[length_min, length_max]`.
///
/// This is the authoritative bound for the final wordlist; earlier per-step
/// checks only prune.
pub fn length_filter<I>(words: I, config: &GeneratorConfig) -> BTreeSet<String>
where
    I: IntoIterator<Item = String>,
{
    words
        .into_iter()
        .filter(|word| config.within_bounds(word))
        .collect()
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Unions `words` with their capitalized forms.
///
/// A capitalized form is only added when it still lies within the length
/// bounds (uppercasing can change the character count, e.g. `ß` -> `SS`).
pub fn add_capitalized(
    mut words: BTreeSet<String>,
    config: &GeneratorConfig,
) -> BTreeSet<String> {
    let capitalized: Vec<String> = words
        .iter()
        .map(|word| capitalize_first(word))
        .filter(|word| config.within_bounds(word))
        .collect();
    words.extend(capitalized);
    words
}
