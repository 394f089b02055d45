use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub providers: Providers,
	#[serde(default)]
	pub enrichment: Enrichment,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub llm: LlmProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

/// Defaults applied to requests that do not set these fields themselves.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Enrichment {
	pub use_basic_enrichment: bool,
	pub use_advanced_enrichment: bool,
	/// Maximum number of merged candidates returned. Zero means unlimited.
	pub how_many: Option<usize>,
	/// Candidates scoring below this value are dropped after merging.
	pub score_filter: Option<f64>,
	/// Caps each extracted term collection before the cross-product is built. Zero disables the
	/// cap.
	pub max_terms_per_collection: usize,
	pub use_thinking: bool,
}
impl Default for Enrichment {
	fn default() -> Self {
		Self {
			use_basic_enrichment: true,
			use_advanced_enrichment: true,
			how_many: Some(10),
			score_filter: None,
			max_terms_per_collection: 16,
			use_thinking: false,
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
