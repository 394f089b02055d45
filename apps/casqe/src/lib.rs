use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use casqe_config::Config;
use casqe_service::{EnrichmentRequest, UnifiedCandidate};

#[derive(Debug, Parser)]
#[command(
	version = casqe_cli::VERSION,
	rename_all = "kebab",
	styles = casqe_cli::styles(),
	about = "Enrich a search query into ranked alternative queries."
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Query to enrich.
	pub query: String,
	/// Who or what the query identifies.
	#[arg(long, value_name = "TEXT")]
	pub identifier_context: Option<String>,
	/// Why the search is being made.
	#[arg(long, value_name = "TEXT")]
	pub search_reason_context: Option<String>,
	/// Rules the generated queries must follow.
	#[arg(long, value_name = "TEXT")]
	pub text_rules: Option<String>,
	/// Maximum number of candidates to print. Zero prints all of them.
	#[arg(long, short = 'n', value_name = "N")]
	pub how_many: Option<usize>,
	/// Drop candidates scored below this value (0.0-1.0).
	#[arg(long, value_name = "SCORE", value_parser = parse_score_filter)]
	pub score_filter: Option<f64>,
	#[arg(long, overrides_with = "no_basic")]
	pub basic: bool,
	#[arg(long)]
	pub no_basic: bool,
	#[arg(long, overrides_with = "no_advanced")]
	pub advanced: bool,
	#[arg(long)]
	pub no_advanced: bool,
	/// Ask the model to reason before answering.
	#[arg(long)]
	pub thinking: bool,
	/// Print candidates as a JSON array.
	#[arg(long)]
	pub json: bool,
}
impl Args {
	/// Builds the request, with flags taking precedence over the `[enrichment]` config section.
	pub fn request(&self, cfg: &Config) -> EnrichmentRequest {
		let mut request = EnrichmentRequest::with_defaults(self.query.clone(), &cfg.enrichment);

		request.identifier_context = self.identifier_context.clone();
		request.search_reason_context = self.search_reason_context.clone();
		request.text_rules = self.text_rules.clone();
		request.use_thinking |= self.thinking;

		if let Some(how_many) = self.how_many {
			request.how_many = Some(how_many);
		}
		if let Some(score_filter) = self.score_filter {
			request.score_filter = Some(score_filter);
		}

		request.use_basic_enrichment =
			toggle(self.basic, self.no_basic, request.use_basic_enrichment);
		request.use_advanced_enrichment =
			toggle(self.advanced, self.no_advanced, request.use_advanced_enrichment);

		request
	}
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = casqe_config::load(&args.config)?;
	init_tracing(&config)?;
	let request = args.request(&config);
	tracing::debug!(
		basic = request.use_basic_enrichment,
		advanced = request.use_advanced_enrichment,
		how_many = ?request.how_many,
		"Enrichment request built."
	);
	let enricher = casqe_service::enricher_from_config(&config);
	let candidates = enricher.enrich(&request).await?;

	println!("{}", render(&candidates, args.json)?);

	Ok(())
}

pub fn render(candidates: &[UnifiedCandidate], json: bool) -> color_eyre::Result<String> {
	if json {
		return Ok(serde_json::to_string_pretty(candidates)?);
	}

	Ok(candidates.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))
}

fn parse_score_filter(raw: &str) -> Result<f64, String> {
	let value: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number."))?;

	if !value.is_finite() || !(0.0..=1.0).contains(&value) {
		return Err(format!("`{raw}` must be a finite number in the range 0.0-1.0."));
	}

	Ok(value)
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
	match (on, off) {
		(true, _) => true,
		(_, true) => false,
		_ => default,
	}
}

fn init_tracing(config: &Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
	Ok(())
}
