//! Normalized string tokens and deduplicated token sets.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of a word as counted for every length bound (Unicode scalar values).
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// A single non-empty keyword, date fragment or range member.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Token(String);

impl Token {
    /// Trims the value and rejects it when nothing is left.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        char_len(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of unique tokens.
///
/// Backed by an ordered set so iteration, and therefore permutation output
/// order, is deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet(BTreeSet<Token>);

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token, returning false when it was already present.
    pub fn insert(&mut self, token: Token) -> bool {
        self.0.insert(token)
    }

    /// Inserts a raw value if it survives trimming.
    pub fn insert_str(&mut self, value: impl AsRef<str>) -> bool {
        match Token::new(value) {
            Some(token) => self.0.insert(token),
            None => false,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Token> {
        self.0.iter()
    }

    /// Borrowed string views in set order.
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(Token::as_str).collect()
    }

    /// Adds every token of `other` to this set.
    pub fn union_with(&mut self, other: &TokenSet) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl FromIterator<Token> for TokenSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Token> for TokenSet {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for TokenSet {
    type Item = Token;
    type IntoIter = btree_set::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = btree_set::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
