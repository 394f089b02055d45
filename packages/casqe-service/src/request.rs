use serde::{Deserialize, Serialize};

use casqe_config::Enrichment;

/// Input to one enrichment call.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EnrichmentRequest {
	pub query: String,
	/// Who or what the query identifies, in the caller's words.
	pub identifier_context: Option<String>,
	/// Why the caller is searching.
	pub search_reason_context: Option<String>,
	/// Free-text rules the generated queries must follow.
	pub text_rules: Option<String>,
	pub score_filter: Option<f64>,
	pub how_many: Option<usize>,
	pub use_thinking: bool,
	pub use_basic_enrichment: bool,
	pub use_advanced_enrichment: bool,
}
impl EnrichmentRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self { query: query.into(), ..Default::default() }
	}

	/// Builds a request whose toggles and limits come from the `[enrichment]` config section.
	pub fn with_defaults(query: impl Into<String>, defaults: &Enrichment) -> Self {
		Self {
			query: query.into(),
			score_filter: defaults.score_filter,
			how_many: defaults.how_many,
			use_thinking: defaults.use_thinking,
			use_basic_enrichment: defaults.use_basic_enrichment,
			use_advanced_enrichment: defaults.use_advanced_enrichment,
			..Default::default()
		}
	}

	/// The limit handed to the merger. Zero means unlimited.
	pub fn limit(&self) -> Option<usize> {
		self.how_many.filter(|limit| *limit > 0)
	}
}
