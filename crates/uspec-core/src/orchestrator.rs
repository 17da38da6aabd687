//! Combines keyword permutations with date and range tails.

use tracing::{debug, info};
use uspec_model::{GeneratorConfig, TokenSet};

use crate::permutation::bounded_permutations;

/// Builds the base candidate list from keywords and tail tokens.
///
/// - Two or more keywords: every arrangement for `r = 1..=n`, ordered by `r`.
/// - One keyword: that keyword as is.
/// - No permutations but tails: exactly the tail tokens.
/// - Permutations and tails: every permutation is kept, followed by each
///   `permutation + tail` that fits within `length_max`.
pub fn build_permutations(
    keywords: &TokenSet,
    tails: &TokenSet,
    config: &GeneratorConfig,
) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    match keywords.len() {
        0 => {}
        1 => candidates.extend(keywords.iter().map(|token| token.as_str().to_string())),
        n => {
            let pool = keywords.as_strs();
            debug!(keyword_count = n, "starting permutations");
            for r in 1..=n {
                candidates.extend(bounded_permutations(
                    pool.iter().copied(),
                    r,
                    Some(config.length_max()),
                ));
            }
            debug!(permutation_count = candidates.len(), "finished permutations");
        }
    }

    if tails.is_empty() {
        return candidates;
    }
    if candidates.is_empty() {
        return tails.iter().map(|token| token.as_str().to_string()).collect();
    }

    let base_count = candidates.len();
    for index in 0..base_count {
        for tail in tails {
            let joined = format!("{}{}", candidates[index], tail);
            if config.fits_max(&joined) {
                candidates.push(joined);
            }
        }
    }
    info!(
        base_count,
        with_tails = candidates.len() - base_count,
        "added date and range tails to permutations"
    );
    candidates
}
