use std::{sync::Arc, time::Instant};

use crate::{
	EnrichmentBackend, EnrichmentEvent, EnrichmentObserver, EnrichmentRequest, Result, Strategy,
	TracingObserver,
};
use casqe_domain::{
	AdvancedCandidate, BasicCandidate, ExtractedTerms, UnifiedCandidate, adapt_rewrites,
	generate_basic_candidates, merge_filtered,
};

pub const DEFAULT_MAX_TERMS_PER_COLLECTION: usize = 16;

/// Runs the enabled strategies for a request and merges their candidates.
#[derive(Clone)]
pub struct Enricher {
	backend: Arc<dyn EnrichmentBackend>,
	observer: Arc<dyn EnrichmentObserver>,
	max_terms_per_collection: usize,
}
impl Enricher {
	pub fn new(backend: Arc<dyn EnrichmentBackend>) -> Self {
		Self {
			backend,
			observer: Arc::new(TracingObserver),
			max_terms_per_collection: DEFAULT_MAX_TERMS_PER_COLLECTION,
		}
	}

	pub fn with_observer(mut self, observer: Arc<dyn EnrichmentObserver>) -> Self {
		self.observer = observer;

		self
	}

	/// Caps each extracted collection before the cross-product is built. Zero disables the cap.
	pub fn with_max_terms_per_collection(mut self, max: usize) -> Self {
		self.max_terms_per_collection = max;

		self
	}

	pub async fn enrich(&self, request: &EnrichmentRequest) -> Result<Vec<UnifiedCandidate>> {
		let started = Instant::now();
		let basic = if request.use_basic_enrichment {
			self.run_basic_enrichment(request).await?
		} else {
			Vec::new()
		};
		let advanced = if request.use_advanced_enrichment {
			self.run_advanced_enrichment(request).await
		} else {
			Vec::new()
		};
		let unified = merge_filtered(&basic, &advanced, request.limit(), request.score_filter);

		self.observer.on_event(&EnrichmentEvent::Completed {
			candidates: unified.len(),
			elapsed: started.elapsed(),
		});

		Ok(unified)
	}

	async fn run_basic_enrichment(
		&self,
		request: &EnrichmentRequest,
	) -> Result<Vec<BasicCandidate>> {
		self.observer.on_event(&EnrichmentEvent::StrategyStarted { strategy: Strategy::Basic });

		let generation = self.backend.extract_terms(request).await;
		let mut terms = if generation.success {
			ExtractedTerms::from_payload(&generation.content)?
		} else {
			ExtractedTerms::default()
		};

		if self.max_terms_per_collection > 0 {
			terms.truncate(self.max_terms_per_collection);
		}

		let candidates = generate_basic_candidates(&terms);

		if candidates.is_empty() {
			self.observer.on_event(&EnrichmentEvent::StrategyEmpty { strategy: Strategy::Basic });
		}

		Ok(candidates)
	}

	async fn run_advanced_enrichment(&self, request: &EnrichmentRequest) -> Vec<AdvancedCandidate> {
		self.observer.on_event(&EnrichmentEvent::StrategyStarted { strategy: Strategy::Advanced });

		let candidates = adapt_rewrites(self.backend.generate_rewrites(request).await);

		if candidates.is_empty() {
			self.observer
				.on_event(&EnrichmentEvent::StrategyEmpty { strategy: Strategy::Advanced });
		}

		candidates
	}
}
