use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

pub const IDENTIFIERS: &str = "identifiers";
pub const PLATFORMS: &str = "platforms";
pub const ENTITIES: &str = "entities";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExtractedTerm {
	pub name: String,
	pub score: f64,
}
impl ExtractedTerm {
	pub fn new(name: impl Into<String>, score: f64) -> Self {
		Self { name: name.into(), score }
	}
}

/// The three term collections produced by the extraction call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractedTerms {
	pub identifiers: Vec<ExtractedTerm>,
	pub platforms: Vec<ExtractedTerm>,
	pub entities: Vec<ExtractedTerm>,
}
impl ExtractedTerms {
	/// Reads the collections out of a raw extraction payload.
	///
	/// A payload that is not an object, or a collection that is missing or not an array, reads
	/// as empty. Without at least one platform and one entity nothing can be combined, so the
	/// terms are not inspected and the result is empty. Otherwise a term without a string
	/// `name` or a numeric `score` is rejected.
	pub fn from_payload(payload: &Value) -> Result<Self> {
		let Some(object) = payload.as_object() else {
			return Ok(Self::default());
		};
		let platforms = raw_collection(object, PLATFORMS);
		let entities = raw_collection(object, ENTITIES);

		if platforms.is_empty() || entities.is_empty() {
			return Ok(Self::default());
		}

		Ok(Self {
			identifiers: parse_terms(IDENTIFIERS, raw_collection(object, IDENTIFIERS))?,
			platforms: parse_terms(PLATFORMS, platforms)?,
			entities: parse_terms(ENTITIES, entities)?,
		})
	}

	/// Basic enrichment needs at least one platform and one entity.
	pub fn is_combinable(&self) -> bool {
		!self.platforms.is_empty() && !self.entities.is_empty()
	}

	pub fn truncate(&mut self, max_per_collection: usize) {
		self.identifiers.truncate(max_per_collection);
		self.platforms.truncate(max_per_collection);
		self.entities.truncate(max_per_collection);
	}
}

fn raw_collection<'a>(object: &'a Map<String, Value>, key: &str) -> &'a [Value] {
	object.get(key).and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default()
}

fn parse_terms(collection: &'static str, items: &[Value]) -> Result<Vec<ExtractedTerm>> {
	items
		.iter()
		.enumerate()
		.map(|(index, item)| {
			let name = item
				.get("name")
				.and_then(Value::as_str)
				.ok_or(Error::MalformedTerm { collection, index, field: "name" })?;
			let score = item
				.get("score")
				.and_then(Value::as_f64)
				.ok_or(Error::MalformedTerm { collection, index, field: "score" })?;

			Ok(ExtractedTerm::new(name, score))
		})
		.collect()
}
