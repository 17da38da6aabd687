use std::collections::BTreeSet;
use std::collections::btree_set;

use serde::{Deserialize, Serialize};

/// Final deduplicated candidates that satisfied the length bounds.
///
/// Iteration yields words in lexicographic order, which is the order the
/// output sink writes them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistResult {
    words: BTreeSet<String>,
}

impl WordlistResult {
    pub fn new(words: BTreeSet<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.words.iter()
    }

    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn into_set(self) -> BTreeSet<String> {
        self.words
    }
}

impl<'a> IntoIterator for &'a WordlistResult {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Counts collected while generating a wordlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Keyword tokens after normalization (and reversal, when enabled).
    pub keyword_count: usize,
    /// Tokens derived from exact dates.
    pub date_token_count: usize,
    /// Tokens derived from numeric ranges.
    pub range_token_count: usize,
    /// Candidates produced by the permutation orchestrator.
    pub permutation_count: usize,
    /// Candidates after the transformation steps, before the length filter.
    pub candidate_count: usize,
    /// Words in the final result.
    pub final_count: usize,
    /// Names of the steps that ran, in execution order.
    pub executed_steps: Vec<String>,
}
