use std::fmt;

use crate::{ExtractedTerm, ExtractedTerms, round_score};

/// One identifier/platform/entity combination together with its combined query and score.
///
/// Values are only produced by [`BasicCandidate::combine`], so `combined` and `combined_score`
/// are always populated and never change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicCandidate {
	identifier: String,
	identifier_score: f64,
	platform: Option<String>,
	platform_score: Option<f64>,
	entity: Option<String>,
	entity_score: Option<f64>,
	combined: String,
	combined_score: f64,
}
impl BasicCandidate {
	pub fn combine(
		identifier: &ExtractedTerm,
		platform: Option<&ExtractedTerm>,
		entity: Option<&ExtractedTerm>,
	) -> Self {
		let combined = combine_text(
			&identifier.name,
			platform.map(|term| term.name.as_str()),
			entity.map(|term| term.name.as_str()),
		);
		let combined_score = round_score(
			[Some(identifier), platform, entity]
				.into_iter()
				.flatten()
				.map(|term| term.score)
				.product(),
		);

		Self {
			identifier: identifier.name.clone(),
			identifier_score: identifier.score,
			platform: platform.map(|term| term.name.clone()),
			platform_score: platform.map(|term| term.score),
			entity: entity.map(|term| term.name.clone()),
			entity_score: entity.map(|term| term.score),
			combined,
			combined_score,
		}
	}

	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	pub fn identifier_score(&self) -> f64 {
		self.identifier_score
	}

	pub fn platform(&self) -> Option<&str> {
		self.platform.as_deref()
	}

	pub fn platform_score(&self) -> Option<f64> {
		self.platform_score
	}

	pub fn entity(&self) -> Option<&str> {
		self.entity.as_deref()
	}

	pub fn entity_score(&self) -> Option<f64> {
		self.entity_score
	}

	pub fn combined(&self) -> &str {
		&self.combined
	}

	pub fn combined_score(&self) -> f64 {
		self.combined_score
	}
}
impl fmt::Display for BasicCandidate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}, combined_scr={:.3}, identifier={}, platform={}, entity={}",
			self.combined,
			self.combined_score,
			self.identifier,
			self.platform.as_deref().unwrap_or("None"),
			self.entity.as_deref().unwrap_or("None"),
		)
	}
}

/// Expands extracted terms into every identifier combination.
///
/// For each identifier this yields one candidate per platform, one per entity, and one per
/// platform/entity pair, in that order. Nothing is produced unless both platforms and entities
/// are present.
pub fn generate_basic_candidates(terms: &ExtractedTerms) -> Vec<BasicCandidate> {
	if !terms.is_combinable() {
		return Vec::new();
	}

	let per_identifier = terms.platforms.len()
		+ terms.entities.len()
		+ terms.platforms.len() * terms.entities.len();
	let mut out = Vec::with_capacity(terms.identifiers.len() * per_identifier);

	for identifier in &terms.identifiers {
		for platform in &terms.platforms {
			out.push(BasicCandidate::combine(identifier, Some(platform), None));
		}
		for entity in &terms.entities {
			out.push(BasicCandidate::combine(identifier, None, Some(entity)));
		}
		for platform in &terms.platforms {
			for entity in &terms.entities {
				out.push(BasicCandidate::combine(identifier, Some(platform), Some(entity)));
			}
		}
	}

	out
}

fn combine_text(identifier: &str, platform: Option<&str>, entity: Option<&str>) -> String {
	let mut parts = vec![identifier];

	if let Some(platform) = platform
		&& !platform.is_empty()
		&& !eq_case_insensitive(platform, identifier)
	{
		parts.push(platform);
	}
	if let Some(entity) = entity
		&& !entity.is_empty()
		&& !parts.iter().any(|part| eq_case_insensitive(part, entity))
	{
		parts.push(entity);
	}

	parts.join(" ")
}

fn eq_case_insensitive(left: &str, right: &str) -> bool {
	left.to_lowercase() == right.to_lowercase()
}
