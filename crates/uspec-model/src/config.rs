//! Generation options consumed by the core.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UspecError};
use crate::token::char_len;

/// Splits a comma-separated literal list, trimming entries and dropping empty ones.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Character substitutions used by leet expansion, keyed by source character.
///
/// Entries are visited in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeetMap(BTreeMap<char, Vec<String>>);

impl LeetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers substitutes for `source`, replacing any earlier entry.
    pub fn insert(&mut self, source: char, substitutes: Vec<String>) {
        self.0.insert(source, substitutes);
    }

    pub fn get(&self, source: char) -> Option<&[String]> {
        self.0.get(&source).map(Vec::as_slice)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, Vec<String>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(char, Vec<String>)> for LeetMap {
    fn from_iter<I: IntoIterator<Item = (char, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Read-only options for one generation run.
///
/// Built once before generation and passed by reference into every stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    /// Shortest word kept in the final wordlist.
    length_min: usize,
    /// Longest word produced by any stage.
    length_max: usize,
    /// Literal suffixes appended by the tails step.
    pub tails: Vec<String>,
    /// Substitutions applied by the leet step.
    pub leet: LeetMap,
    /// Literal suffixes appended by the special-character step.
    pub special_chars: Vec<String>,
    /// When true every surviving word must carry a special character.
    pub required: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with the given length bounds and no literals.
    ///
    /// # Errors
    ///
    /// Returns [`UspecError::Configuration`] when `length_min > length_max`.
    pub fn new(length_min: usize, length_max: usize) -> Result<Self> {
        if length_min > length_max {
            return Err(UspecError::configuration(format!(
                "length_min ({length_min}) must not exceed length_max ({length_max})"
            )));
        }
        Ok(Self {
            length_min,
            length_max,
            tails: Vec::new(),
            leet: LeetMap::default(),
            special_chars: Vec::new(),
            required: false,
        })
    }

    pub fn with_tails(mut self, tails: Vec<String>) -> Self {
        self.tails = tails;
        self
    }

    pub fn with_leet(mut self, leet: LeetMap) -> Self {
        self.leet = leet;
        self
    }

    pub fn with_special_chars(mut self, special_chars: Vec<String>, required: bool) -> Self {
        self.special_chars = special_chars;
        self.required = required;
        self
    }

    pub fn length_min(&self) -> usize {
        self.length_min
    }

    pub fn length_max(&self) -> usize {
        self.length_max
    }

    /// True when `word` is no longer than `length_max`.
    pub fn fits_max(&self, word: &str) -> bool {
        char_len(word) <= self.length_max
    }

    /// True when `word` lies in `[length_min, length_max]`.
    pub fn within_bounds(&self, word: &str) -> bool {
        let len = char_len(word);
        len >= self.length_min && len <= self.length_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_drops_blank_entries() {
        assert_eq!(split_csv(" 1, 12,,123 ,"), vec!["1", "12", "123"]);
        assert!(split_csv("").is_empty());
        assert!(split_csv(" , ").is_empty());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = GeneratorConfig::new(10, 4).unwrap_err();
        assert!(matches!(err, UspecError::Configuration(_)));
        assert!(GeneratorConfig::new(4, 4).is_ok());
    }

    #[test]
    fn bounds_use_char_count() {
        let config = GeneratorConfig::new(2, 4).unwrap();
        assert!(config.within_bounds("äöü"));
        assert!(!config.within_bounds("a"));
        assert!(!config.within_bounds("abcde"));
        assert!(config.fits_max("a"));
    }

    #[test]
    fn leet_map_iterates_in_key_order() {
        let map: LeetMap = [
            ('o', vec!["0".to_string()]),
            ('a', vec!["4".to_string(), "@".to_string()]),
        ]
        .into_iter()
        .collect();
        let keys: Vec<char> = map.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!['a', 'o']);
        assert_eq!(map.get('a').map(<[String]>::len), Some(2));
    }
}
