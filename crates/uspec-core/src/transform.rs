//! Candidate transformation pipeline with ordered step execution.
//!
//! Each step implements [`TransformStep`], consumes the candidate list and
//! returns the next one. Steps keep list semantics; deduplication happens in
//! the length filter that follows the pipeline.
//!
//! # Standard Pipeline Order
//!
//! 1. **TailsStep** - Append configured tails
//! 2. **SpecialCharsStep** - Append special characters (replacing the list when required)
//! 3. **LeetStep** - Add leet substitutions
//!
//! # Example
//!
//! ```ignore
//! use uspec_core::transform::{TransformOptions, build_default_pipeline};
//!
//! let pipeline = build_default_pipeline();
//! let run = pipeline.execute(candidates, &config, &TransformOptions::default());
//! ```

use tracing::{debug, debug_span};
use uspec_model::{GeneratorConfig, LeetMap};

/// Which optional transformations a run enables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub tails: bool,
    pub special_chars: bool,
    pub leet: bool,
    pub capitalize: bool,
}

/// A single transformation over the candidate list.
pub trait TransformStep: Send + Sync {
    /// Produce the next candidate list from `words`.
    fn apply(&self, words: Vec<String>, config: &GeneratorConfig) -> Vec<String>;

    /// Human-readable name for this step (for logging/debugging).
    fn step_name(&self) -> &str;

    /// Whether this step should be skipped for the given options.
    ///
    /// Default implementation always runs the step.
    fn should_skip(&self, _options: &TransformOptions) -> bool {
        false
    }
}

/// Candidates produced by a pipeline run.
#[derive(Debug, Default)]
pub struct PipelineRun {
    pub words: Vec<String>,
    pub executed_steps: Vec<String>,
}

/// An ordered pipeline of transformation steps.
pub struct TransformPipeline {
    steps: Vec<Box<dyn TransformStep>>,
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step to the end of the pipeline.
    pub fn add_step(mut self, step: Box<dyn TransformStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Remove a step by name.
    pub fn remove_step(mut self, step_name: &str) -> Self {
        self.steps.retain(|s| s.step_name() != step_name);
        self
    }

    /// Execute all enabled steps in order.
    pub fn execute(
        &self,
        words: Vec<String>,
        config: &GeneratorConfig,
        options: &TransformOptions,
    ) -> PipelineRun {
        let mut run = PipelineRun {
            words,
            executed_steps: Vec::new(),
        };
        for step in &self.steps {
            if step.should_skip(options) {
                continue;
            }
            let span = debug_span!("transform_step", step = step.step_name());
            let _guard = span.enter();
            let before = run.words.len();
            run.words = step.apply(std::mem::take(&mut run.words), config);
            debug!(before, after = run.words.len(), "step complete");
            run.executed_steps.push(step.step_name().to_string());
        }
        run
    }

    /// List step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }
}

/// Every `word + tail` that fits within `length_max`.
pub fn add_tails(words: &[String], config: &GeneratorConfig) -> Vec<String> {
    append_suffixes(words, &config.tails, config)
}

/// Every `word + special` that fits within `length_max`.
pub fn add_special_chars(words: &[String], config: &GeneratorConfig) -> Vec<String> {
    append_suffixes(words, &config.special_chars, config)
}

fn append_suffixes(
    words: &[String],
    suffixes: &[String],
    config: &GeneratorConfig,
) -> Vec<String> {
    let mut out = Vec::new();
    for word in words {
        for suffix in suffixes {
            let joined = format!("{word}{suffix}");
            if config.fits_max(&joined) {
                out.push(joined);
            }
        }
    }
    out
}

/// Leet variants of `words`.
///
/// For every source character and every one of its substitutes two families
/// are produced:
///
/// - the original word with that substitution applied on its own, and
/// - a running copy of the word list to which each substitution is applied
///   in turn, so that words end up with several characters replaced at once.
///
/// The running copy only keeps one substitute per character (the first one
/// that replaces anything), and single substitutions are never combined with
/// each other, so `apple` with `a -> 4,@` and `e -> 3` yields `4pple`,
/// `@pple`, `appl3` and `4ppl3` but not `@ppl3`. The output keeps
/// unchanged copies of words that contain none of the source characters.
pub fn add_leet(words: &[String], leet: &LeetMap) -> Vec<String> {
    let mut single = Vec::new();
    let mut combined: Vec<String> = words.to_vec();
    for (source, substitutes) in leet.iter() {
        for substitute in substitutes {
            for word in &mut combined {
                *word = word.replace(*source, substitute);
            }
            single.extend(words.iter().map(|word| word.replace(*source, substitute)));
        }
    }
    single.extend(combined);
    single
}

/// Step 1: append configured tails to every candidate.
pub struct TailsStep;

impl TransformStep for TailsStep {
    fn apply(&self, mut words: Vec<String>, config: &GeneratorConfig) -> Vec<String> {
        let tails = add_tails(&words, config);
        words.extend(tails);
        words
    }

    fn step_name(&self) -> &str {
        "tails"
    }

    fn should_skip(&self, options: &TransformOptions) -> bool {
        !options.tails
    }
}

/// Step 2: append special characters.
///
/// With `required` the suffixed words replace the list, otherwise they are
/// added next to the originals.
pub struct SpecialCharsStep;

impl TransformStep for SpecialCharsStep {
    fn apply(&self, mut words: Vec<String>, config: &GeneratorConfig) -> Vec<String> {
        let specials = add_special_chars(&words, config);
        if config.required {
            return specials;
        }
        words.extend(specials);
        words
    }

    fn step_name(&self) -> &str {
        "special_chars"
    }

    fn should_skip(&self, options: &TransformOptions) -> bool {
        !options.special_chars
    }
}

/// Step 3: add leet substitutions.
pub struct LeetStep;

impl TransformStep for LeetStep {
    fn apply(&self, mut words: Vec<String>, config: &GeneratorConfig) -> Vec<String> {
        let leet = add_leet(&words, &config.leet);
        words.extend(leet);
        words
    }

    fn step_name(&self) -> &str {
        "leet"
    }

    fn should_skip(&self, options: &TransformOptions) -> bool {
        !options.leet
    }
}

/// Build the default transformation pipeline.
///
/// This returns a pipeline with the standard steps:
/// 1. Tails
/// 2. Special characters
/// 3. Leet substitution
pub fn build_default_pipeline() -> TransformPipeline {
    TransformPipeline::new()
        .add_step(Box::new(TailsStep))
        .add_step(Box::new(SpecialCharsStep))
        .add_step(Box::new(LeetStep))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn tails_respect_length_max() {
        let config = GeneratorConfig::new(0, 6)
            .unwrap()
            .with_tails(words(&["1", "123"]));
        let out = add_tails(&words(&["john", "abcde"]), &config);
        assert_eq!(out, words(&["john1", "abcde1"]));
    }

    #[test]
    fn special_chars_augment_or_replace() {
        let config = GeneratorConfig::new(0, 8)
            .unwrap()
            .with_special_chars(words(&["!", "?"]), false);
        let out = SpecialCharsStep.apply(words(&["doe"]), &config);
        assert_eq!(out, words(&["doe", "doe!", "doe?"]));

        let required = config.with_special_chars(words(&["!", "?"]), true);
        let out = SpecialCharsStep.apply(words(&["doe"]), &required);
        assert_eq!(out, words(&["doe!", "doe?"]));
    }

    #[test]
    fn leet_produces_single_and_running_families() {
        let mut leet = LeetMap::new();
        leet.insert('a', words(&["4", "@"]));
        leet.insert('e', words(&["3"]));
        leet.insert('l', words(&["1"]));
        let out = add_leet(&words(&["apple", "bee"]), &leet);
        assert_eq!(
            out,
            words(&[
                "4pple", "bee", "@pple", "bee", "appl3", "b33", "app1e", "bee", "4pp13", "b33"
            ])
        );
    }

    #[test]
    fn leet_is_not_idempotent() {
        let mut leet = LeetMap::new();
        leet.insert('a', words(&["4"]));
        leet.insert('e', words(&["3"]));
        let config = GeneratorConfig::new(0, 20).unwrap().with_leet(leet);
        let once = LeetStep.apply(words(&["ae"]), &config);
        let twice = LeetStep.apply(once.clone(), &config);
        assert_ne!(once, twice);
    }

    #[test]
    fn default_pipeline_has_standard_steps() {
        let pipeline = build_default_pipeline();
        assert_eq!(pipeline.step_names(), vec!["tails", "special_chars", "leet"]);
    }

    #[test]
    fn disabled_steps_are_skipped() {
        let config = GeneratorConfig::new(0, 10)
            .unwrap()
            .with_tails(words(&["1"]))
            .with_special_chars(words(&["!"]), false);
        let options = TransformOptions {
            special_chars: true,
            ..Default::default()
        };
        let run = build_default_pipeline().execute(words(&["doe"]), &config, &options);
        assert_eq!(run.executed_steps, vec!["special_chars"]);
        assert_eq!(run.words, words(&["doe", "doe!"]));
    }

    #[test]
    fn steps_run_in_canonical_order() {
        let config = GeneratorConfig::new(0, 10)
            .unwrap()
            .with_tails(words(&["1"]))
            .with_special_chars(words(&["!"]), true);
        let options = TransformOptions {
            tails: true,
            special_chars: true,
            ..Default::default()
        };
        let run = build_default_pipeline().execute(words(&["doe"]), &config, &options);
        assert_eq!(run.words, words(&["doe!", "doe1!"]));
    }

    #[test]
    fn pipeline_can_remove_steps() {
        let pipeline = build_default_pipeline().remove_step("leet");
        assert_eq!(pipeline.step_names(), vec!["tails", "special_chars"]);
    }
}
