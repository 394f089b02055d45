//! Search query enrichment service.
//!
//! [`Enricher`] asks an [`EnrichmentBackend`] for extracted terms and model rewrites, expands
//! the terms into basic candidates, and merges both sets into one ranked list.

pub mod backend;
pub mod enricher;
pub mod observer;
pub mod prompts;
pub mod request;

mod error;

pub use backend::{BoxFuture, CompletionProvider, EnrichmentBackend, LlmBackend};
pub use casqe_domain::{Generation, Origin, RewriteItem, UnifiedCandidate};
pub use enricher::Enricher;
pub use error::{Error, Result};
pub use observer::{EnrichmentEvent, EnrichmentObserver, Strategy, TracingObserver};
pub use request::EnrichmentRequest;

use std::sync::Arc;

use casqe_config::Config;

/// Builds an enricher backed by the configured LLM provider.
pub fn enricher_from_config(cfg: &Config) -> Enricher {
	let backend = LlmBackend::new(cfg.providers.llm.clone());

	Enricher::new(Arc::new(backend))
		.with_max_terms_per_collection(cfg.enrichment.max_terms_per_collection)
}
