use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Generation;

/// One structured item returned by the rewrite call.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RewriteItem {
	#[serde(default)]
	pub enriched_query: Option<String>,
	/// Accepted in place of `enriched_query`.
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	pub explanation: Option<String>,
	pub score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdvancedCandidate {
	pub query: String,
	pub score: f64,
	pub explanation: Option<String>,
}
impl AdvancedCandidate {
	pub fn new(query: impl Into<String>, score: f64, explanation: Option<String>) -> Self {
		Self { query: query.into(), score, explanation }
	}
}
impl From<RewriteItem> for AdvancedCandidate {
	fn from(item: RewriteItem) -> Self {
		let RewriteItem { enriched_query, query, explanation, score } = item;
		let query = [enriched_query, query]
			.into_iter()
			.flatten()
			.map(|value| value.trim().to_string())
			.find(|value| !value.is_empty())
			.unwrap_or_default();

		Self { query, score, explanation }
	}
}
impl fmt::Display for AdvancedCandidate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}, score={:.3}, explanation={}",
			self.query,
			self.score,
			self.explanation.as_deref().unwrap_or("None"),
		)
	}
}

/// Turns a rewrite response into candidates, one per item. A failed call yields nothing.
pub fn adapt_rewrites(generation: Generation<Vec<RewriteItem>>) -> Vec<AdvancedCandidate> {
	if !generation.success {
		return Vec::new();
	}

	generation.content.into_iter().map(AdvancedCandidate::from).collect()
}
