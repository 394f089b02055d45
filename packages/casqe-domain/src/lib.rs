//! Candidate generation, scoring and merging for search query enrichment.

mod error;

pub mod advanced;
pub mod basic;
pub mod merge;
pub mod term;

pub use advanced::{AdvancedCandidate, RewriteItem, adapt_rewrites};
pub use basic::{BasicCandidate, generate_basic_candidates};
pub use error::{Error, Result};
pub use merge::{CandidateTable, Origin, UnifiedCandidate, merge, merge_filtered};
pub use term::{ExtractedTerm, ExtractedTerms};

/// Envelope returned by an upstream generation call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Generation<T> {
	pub success: bool,
	pub content: T,
}
impl<T> Generation<T> {
	pub fn ok(content: T) -> Self {
		Self { success: true, content }
	}

	pub fn failed() -> Self
	where
		T: Default,
	{
		Self { success: false, content: T::default() }
	}
}

/// Rounds a score to three decimal places, with exact halves going to the even digit.
pub fn round_score(score: f64) -> f64 {
	(score * 1_000.0).round_ties_even() / 1_000.0
}
