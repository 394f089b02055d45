use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};
use casqe_config::LlmProviderConfig;

const MAX_ATTEMPTS: usize = 3;

/// Sends a chat completion and returns the first choice's content parsed as JSON.
///
/// Completions whose content is not valid JSON are requested again, up to three attempts.
/// Transport and HTTP status errors are returned immediately.
pub async fn complete(cfg: &LlmProviderConfig, messages: &[Value]) -> Result<Value> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"messages": messages,
	});
	let mut last_err = None;

	for _ in 0..MAX_ATTEMPTS {
		let res = client
			.post(&url)
			.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
			.json(&body)
			.send()
			.await?;
		let json: Value = res.error_for_status()?.json().await?;

		match parse_completion_json(json) {
			Ok(parsed) => return Ok(parsed),
			Err(err) => last_err = Some(err),
		}
	}

	Err(last_err.unwrap_or_else(|| Error::InvalidResponse {
		message: "Completion response is not valid JSON.".to_string(),
	}))
}

fn parse_completion_json(json: Value) -> Result<Value> {
	if let Some(content) = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
	{
		let parsed: Value = serde_json::from_str(strip_code_fence(content)).map_err(|_| {
			Error::InvalidResponse { message: "Completion content is not valid JSON.".to_string() }
		})?;

		return Ok(parsed);
	}

	if json.get("choices").is_none() && (json.is_object() || json.is_array()) {
		return Ok(json);
	}

	Err(Error::InvalidResponse {
		message: "Completion response is missing JSON content.".to_string(),
	})
}

// Models often wrap JSON answers in a Markdown fence.
fn strip_code_fence(content: &str) -> &str {
	let trimmed = content.trim();
	let Some(inner) = trimmed.strip_prefix("```") else {
		return trimmed;
	};
	let inner = inner.strip_suffix("```").unwrap_or(inner);
	let inner = inner.strip_prefix("json").unwrap_or(inner);

	inner.trim()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_choice_content_json() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": "{\"platforms\": []}" } }
			]
		});
		let parsed = parse_completion_json(json).expect("parse failed");
		assert!(parsed.get("platforms").is_some());
	}

	#[test]
	fn parses_fenced_choice_content() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": "```json\n{\"queries\": [{\"enriched_query\": \"a\", \"score\": 0.5}]}\n```" } }
			]
		});
		let parsed = parse_completion_json(json).expect("parse failed");
		assert_eq!(parsed["queries"][0]["enriched_query"], "a");
	}

	#[test]
	fn rejects_prose_content() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": "Here are some queries you could try." } }
			]
		});
		assert!(matches!(parse_completion_json(json), Err(Error::InvalidResponse { .. })));
	}

	#[test]
	fn accepts_bare_json_body() {
		let json = serde_json::json!({ "identifiers": [] });
		let parsed = parse_completion_json(json).expect("parse failed");
		assert!(parsed.get("identifiers").is_some());
	}

	#[test]
	fn rejects_choices_without_content() {
		let json = serde_json::json!({ "choices": [] });
		assert!(parse_completion_json(json).is_err());
	}
}
