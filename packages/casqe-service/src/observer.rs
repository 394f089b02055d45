use std::{fmt, time::Duration};

use tracing::{debug, info};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
	Basic,
	Advanced,
}
impl Strategy {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Basic => "basic",
			Self::Advanced => "advanced",
		}
	}
}
impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum EnrichmentEvent {
	StrategyStarted { strategy: Strategy },
	StrategyEmpty { strategy: Strategy },
	Completed { candidates: usize, elapsed: Duration },
}

/// Receives progress events from an [`crate::Enricher`].
///
/// Any `Fn(&EnrichmentEvent) + Send + Sync` closure is an observer.
pub trait EnrichmentObserver
where
	Self: Send + Sync,
{
	fn on_event(&self, event: &EnrichmentEvent);
}
impl<F> EnrichmentObserver for F
where
	F: Fn(&EnrichmentEvent) + Send + Sync,
{
	fn on_event(&self, event: &EnrichmentEvent) {
		self(event)
	}
}

/// Default observer, forwards events to `tracing`.
pub struct TracingObserver;
impl EnrichmentObserver for TracingObserver {
	fn on_event(&self, event: &EnrichmentEvent) {
		match event {
			EnrichmentEvent::StrategyStarted { strategy } => {
				debug!(strategy = strategy.as_str(), "Enrichment strategy started.");
			},
			EnrichmentEvent::StrategyEmpty { strategy } => {
				info!(strategy = strategy.as_str(), "Enrichment strategy produced no candidates.");
			},
			EnrichmentEvent::Completed { candidates, elapsed } => {
				info!(
					candidates,
					elapsed_ms = elapsed.as_millis() as u64,
					"Enrichment completed."
				);
			},
		}
	}
}
