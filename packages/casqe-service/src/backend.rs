use std::{future::Future, pin::Pin, sync::Arc};

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::{
	EnrichmentRequest,
	prompts::{build_extraction_messages, build_rewrite_messages},
};
use casqe_config::LlmProviderConfig;
use casqe_domain::{Generation, RewriteItem};
use casqe_providers::llm;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The two upstream generation calls enrichment depends on.
///
/// Implementations report failures through `Generation::success` instead of returning errors.
pub trait EnrichmentBackend
where
	Self: Send + Sync,
{
	/// Returns the raw `{identifiers, platforms, entities}` payload.
	fn extract_terms<'a>(
		&'a self,
		request: &'a EnrichmentRequest,
	) -> BoxFuture<'a, Generation<Value>>;

	fn generate_rewrites<'a>(
		&'a self,
		request: &'a EnrichmentRequest,
	) -> BoxFuture<'a, Generation<Vec<RewriteItem>>>;
}

pub trait CompletionProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, casqe_providers::Result<Value>>;
}

/// Backend that asks a chat-completions model for both terms and rewrites.
#[derive(Clone)]
pub struct LlmBackend {
	cfg: LlmProviderConfig,
	provider: Arc<dyn CompletionProvider>,
}
impl LlmBackend {
	pub fn new(cfg: LlmProviderConfig) -> Self {
		Self::with_provider(cfg, Arc::new(HttpCompletion))
	}

	pub fn with_provider(cfg: LlmProviderConfig, provider: Arc<dyn CompletionProvider>) -> Self {
		Self { cfg, provider }
	}

	async fn complete_json(&self, messages: Vec<Value>, call: &'static str) -> Option<Value> {
		match self.provider.complete(&self.cfg, &messages).await {
			Ok(value) => Some(value),
			Err(err) => {
				warn!(error = %err, call, model = %self.cfg.model, "Generation call failed.");

				None
			},
		}
	}
}
impl EnrichmentBackend for LlmBackend {
	fn extract_terms<'a>(
		&'a self,
		request: &'a EnrichmentRequest,
	) -> BoxFuture<'a, Generation<Value>> {
		Box::pin(async move {
			match self.complete_json(build_extraction_messages(request), "extract_terms").await {
				Some(value) => Generation::ok(value),
				None => Generation::failed(),
			}
		})
	}

	fn generate_rewrites<'a>(
		&'a self,
		request: &'a EnrichmentRequest,
	) -> BoxFuture<'a, Generation<Vec<RewriteItem>>> {
		Box::pin(async move {
			let Some(value) =
				self.complete_json(build_rewrite_messages(request), "generate_rewrites").await
			else {
				return Generation::failed();
			};

			match parse_rewrites(value) {
				Ok(items) => Generation::ok(items),
				Err(err) => {
					warn!(error = %err, "Rewrite response does not match the expected schema.");

					Generation::failed()
				},
			}
		})
	}
}

struct HttpCompletion;
impl CompletionProvider for HttpCompletion {
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, casqe_providers::Result<Value>> {
		Box::pin(llm::complete(cfg, messages))
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RewriteOutput {
	Wrapped { queries: Vec<RewriteItem> },
	Bare(Vec<RewriteItem>),
}

fn parse_rewrites(value: Value) -> serde_json::Result<Vec<RewriteItem>> {
	let items = match serde_json::from_value(value)? {
		RewriteOutput::Wrapped { queries } => queries,
		RewriteOutput::Bare(items) => items,
	};

	Ok(items)
}
