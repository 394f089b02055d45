use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{AdvancedCandidate, BasicCandidate};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
	Basic,
	Advanced,
}
impl Origin {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Basic => "basic",
			Self::Advanced => "advanced",
		}
	}
}
impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UnifiedCandidate {
	pub query: String,
	pub score: f64,
	pub explanation: Option<String>,
	pub origin: Origin,
}
impl UnifiedCandidate {
	fn key(&self) -> String {
		self.query.to_lowercase()
	}
}
impl From<&BasicCandidate> for UnifiedCandidate {
	fn from(candidate: &BasicCandidate) -> Self {
		Self {
			query: candidate.combined().to_string(),
			score: candidate.combined_score(),
			explanation: None,
			origin: Origin::Basic,
		}
	}
}
impl From<&AdvancedCandidate> for UnifiedCandidate {
	fn from(candidate: &AdvancedCandidate) -> Self {
		Self {
			query: candidate.query.clone(),
			score: candidate.score,
			explanation: candidate.explanation.clone(),
			origin: Origin::Advanced,
		}
	}
}
impl fmt::Display for UnifiedCandidate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}  (score={:.3})", self.origin, self.query, self.score)
	}
}

/// Insertion-ordered table of candidates keyed by lower-cased query.
///
/// A key keeps the slot of its first insertion. A later candidate for the same key replaces the
/// stored one only when its score is strictly greater, so equal scores keep the first seen.
#[derive(Debug, Default)]
pub struct CandidateTable {
	slots: Vec<UnifiedCandidate>,
	index: HashMap<String, usize>,
}
impl CandidateTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` when the candidate was stored.
	pub fn offer(&mut self, candidate: UnifiedCandidate) -> bool {
		if candidate.query.is_empty() {
			return false;
		}

		let key = candidate.key();

		match self.index.get(&key).copied() {
			Some(slot) => {
				if candidate.score > self.slots[slot].score {
					self.slots[slot] = candidate;

					return true;
				}

				false
			},
			None => {
				self.index.insert(key, self.slots.len());
				self.slots.push(candidate);

				true
			},
		}
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Consumes the table into a score-descending list. Equal scores stay in slot order.
	pub fn into_ranked(self) -> Vec<UnifiedCandidate> {
		let mut ranked = self.slots;

		ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

		ranked
	}
}
impl Extend<UnifiedCandidate> for CandidateTable {
	fn extend<I: IntoIterator<Item = UnifiedCandidate>>(&mut self, iter: I) {
		for candidate in iter {
			self.offer(candidate);
		}
	}
}

/// Merges basic and advanced candidates into one deduplicated, score-descending list.
///
/// `limit` of `None` or `Some(0)` returns every candidate.
pub fn merge(
	basic: &[BasicCandidate],
	advanced: &[AdvancedCandidate],
	limit: Option<usize>,
) -> Vec<UnifiedCandidate> {
	merge_filtered(basic, advanced, limit, None)
}

/// Same as [`merge`], dropping candidates scored below `min_score` before the limit applies.
pub fn merge_filtered(
	basic: &[BasicCandidate],
	advanced: &[AdvancedCandidate],
	limit: Option<usize>,
	min_score: Option<f64>,
) -> Vec<UnifiedCandidate> {
	let mut table = CandidateTable::new();

	table.extend(basic.iter().map(UnifiedCandidate::from));
	table.extend(advanced.iter().map(UnifiedCandidate::from));

	let mut ranked = table.into_ranked();

	if let Some(min_score) = min_score {
		ranked.retain(|candidate| candidate.score >= min_score);
	}
	if let Some(limit) = limit.filter(|limit| *limit > 0) {
		ranked.truncate(limit);
	}

	ranked
}

#[cfg(test)]
mod tests {
	use super::*;

	fn unified(query: &str, score: f64, origin: Origin) -> UnifiedCandidate {
		UnifiedCandidate { query: query.to_string(), score, explanation: None, origin }
	}

	#[test]
	fn replacement_keeps_first_slot() {
		let mut table = CandidateTable::new();

		table.offer(unified("a", 0.5, Origin::Basic));
		table.offer(unified("b", 0.5, Origin::Basic));
		table.offer(unified("A", 0.9, Origin::Advanced));

		assert_eq!(table.len(), 2);
		assert_eq!(table.slots[0].query, "A");
		assert_eq!(table.slots[1].query, "b");
	}

	#[test]
	fn rejects_empty_query() {
		let mut table = CandidateTable::new();

		assert!(!table.offer(unified("", 1.0, Origin::Advanced)));
		assert!(table.is_empty());
	}

	#[test]
	fn equal_score_keeps_existing_entry() {
		let mut table = CandidateTable::new();

		assert!(table.offer(unified("Enes Kuzucu", 0.8, Origin::Basic)));
		assert!(!table.offer(unified("enes kuzucu", 0.8, Origin::Advanced)));

		let ranked = table.into_ranked();

		assert_eq!(ranked, vec![unified("Enes Kuzucu", 0.8, Origin::Basic)]);
	}

	#[test]
	fn renders_origin_query_and_score() {
		let candidate = unified("Enes EETECH", 0.9, Origin::Basic);

		assert_eq!(candidate.to_string(), "[basic] Enes EETECH  (score=0.900)");
	}
}
