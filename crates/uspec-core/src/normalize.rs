//! Keyword cleanup ahead of permutation.

use uspec_model::{Token, TokenSet};

/// Trims raw keywords, lowercases them unless `case_sensitive`, and drops empties.
pub fn normalize_keywords<I, S>(raw: I, case_sensitive: bool) -> TokenSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|value| {
            let value = value.as_ref();
            if case_sensitive {
                Token::new(value)
            } else {
                Token::new(value.to_lowercase())
            }
        })
        .collect()
}

/// Reverses every keyword character-wise.
///
/// Palindromes reverse onto themselves and collapse when unioned with the input.
pub fn reverse_keywords(keywords: &TokenSet) -> TokenSet {
    keywords
        .iter()
        .filter_map(|token| Token::new(token.as_str().chars().rev().collect::<String>()))
        .collect()
}
