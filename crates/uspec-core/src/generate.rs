//! End-to-end wordlist generation.
//!
//! Data flows strictly forward:
//!
//! raw input -> normalized keywords -> date/range tails -> permutations ->
//! transformation steps -> length filter -> capitalization

use std::time::Instant;

use tracing::{info, info_span, warn};
use uspec_model::{
    GenerationReport, GeneratorConfig, Result, TokenSet, UspecError, WordlistResult,
};

use crate::expand::{expand_dates, expand_ranges};
use crate::filter::{add_capitalized, length_filter};
use crate::normalize::{normalize_keywords, reverse_keywords};
use crate::orchestrator::build_permutations;
use crate::transform::{TransformOptions, build_default_pipeline};

/// Raw user input for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Keywords as entered or imported, before normalization.
    pub keywords: Vec<String>,
    /// Comma-separated `DD.MM.YYYY` dates; `None` or blank means no input.
    pub dates: Option<String>,
    /// Comma-separated `N-N` ranges; `None` or blank means no input.
    pub ranges: Option<String>,
    /// Keep keyword case instead of lowercasing.
    pub case_sensitive: bool,
    /// Add reversed keywords.
    pub reverse: bool,
    pub transforms: TransformOptions,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub wordlist: WordlistResult,
    pub report: GenerationReport,
    /// Date or range input that was supplied but rejected.
    pub warnings: Vec<UspecError>,
}

/// Generates the wordlist for `request` under `config`.
///
/// Faulty date or range input is logged, recorded in
/// [`GenerationOutcome::warnings`] and otherwise ignored.
///
/// # Errors
///
/// Returns [`UspecError::InsufficientInput`] when no keywords and no date or
/// range tokens remain.
pub fn generate_wordlist(
    request: &GenerationRequest,
    config: &GeneratorConfig,
) -> Result<GenerationOutcome> {
    let span = info_span!("generate");
    let _guard = span.enter();
    let start = Instant::now();

    let mut keywords = normalize_keywords(&request.keywords, request.case_sensitive);
    let mut warnings = Vec::new();
    let date_tokens = expand_optional(request.dates.as_deref(), expand_dates, &mut warnings);
    let range_tokens = expand_optional(request.ranges.as_deref(), expand_ranges, &mut warnings);

    let mut tails = date_tokens.clone();
    tails.union_with(&range_tokens);

    if keywords.is_empty() && tails.is_empty() {
        return Err(UspecError::InsufficientInput);
    }

    if request.reverse {
        let reversed = reverse_keywords(&keywords);
        keywords.union_with(&reversed);
    }

    info!(
        keyword_count = keywords.len(),
        tail_count = tails.len(),
        "generating wordlist"
    );
    let permutations = build_permutations(&keywords, &tails, config);
    let permutation_count = permutations.len();

    let run = build_default_pipeline().execute(permutations, config, &request.transforms);
    let candidate_count = run.words.len();
    let mut executed_steps = run.executed_steps;

    let mut words = length_filter(run.words, config);
    executed_steps.push("length_filter".to_string());
    if request.transforms.capitalize {
        words = add_capitalized(words, config);
        executed_steps.push("capitalize".to_string());
    }

    let wordlist = WordlistResult::new(words);
    let report = GenerationReport {
        keyword_count: keywords.len(),
        date_token_count: date_tokens.len(),
        range_token_count: range_tokens.len(),
        permutation_count,
        candidate_count,
        final_count: wordlist.len(),
        executed_steps,
    };
    info!(
        final_count = report.final_count,
        duration_ms = start.elapsed().as_millis(),
        "generated wordlist"
    );

    Ok(GenerationOutcome {
        wordlist,
        report,
        warnings,
    })
}

/// Treats blank input as absent and downgrades format errors to warnings.
fn expand_optional(
    input: Option<&str>,
    expand: fn(&str) -> Result<TokenSet>,
    warnings: &mut Vec<UspecError>,
) -> TokenSet {
    let Some(input) = input.filter(|value| !value.trim().is_empty()) else {
        return TokenSet::new();
    };
    match expand(input) {
        Ok(tokens) => tokens,
        Err(error) => {
            warn!(%error, "ignoring input");
            warnings.push(error);
            TokenSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_not_a_warning() {
        let mut warnings = Vec::new();
        let tokens = expand_optional(Some("   "), expand_ranges, &mut warnings);
        assert!(tokens.is_empty());
        assert!(warnings.is_empty());

        let tokens = expand_optional(None, expand_dates, &mut warnings);
        assert!(tokens.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn garbage_input_is_a_warning() {
        let mut warnings = Vec::new();
        let tokens = expand_optional(Some("soon"), expand_dates, &mut warnings);
        assert!(tokens.is_empty());
        assert_eq!(warnings.len(), 1);
    }
}
