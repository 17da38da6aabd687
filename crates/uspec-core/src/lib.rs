//! Wordlist generation engine.
//!
//! Turns keywords, dates and numeric ranges into length-bounded candidate
//! passwords. See [`generate_wordlist`] for the full flow; the individual
//! stages are public for callers that compose their own.

pub mod expand;
pub mod filter;
pub mod generate;
pub mod normalize;
pub mod orchestrator;
pub mod permutation;
pub mod transform;

pub use expand::{expand_dates, expand_ranges, year_variants};
pub use filter::{add_capitalized, capitalize_first, length_filter};
pub use generate::{GenerationOutcome, GenerationRequest, generate_wordlist};
pub use normalize::{normalize_keywords, reverse_keywords};
pub use orchestrator::build_permutations;
pub use permutation::{BoundedPermutations, arrangement_count, bounded_permutations};
pub use transform::{
    LeetStep, PipelineRun, SpecialCharsStep, TailsStep, TransformOptions, TransformPipeline,
    TransformStep, add_leet, add_special_chars, add_tails, build_default_pipeline,
};
