use serde_json::Value;

use crate::EnrichmentRequest;

const EXTRACTION_SYSTEM_PROMPT: &str = "You are a search query analyst. \
Output must be valid JSON only and must match the provided schema exactly. \
Identifiers are names, handles or nicknames that point at the subject of the query. \
Platforms are websites, services or organizations where the subject is likely to appear. \
Entities are other terms strongly tied to the subject, such as employers, projects or roles. \
Score every term between 0.0 and 1.0 by how strongly it identifies the subject. \
Do not add explanations or extra fields.";

const REWRITE_SYSTEM_PROMPT: &str = "You are a search query enrichment engine. \
Output must be valid JSON only and must match the provided schema exactly. \
Rewrite the original query into alternative web search queries that are more likely to find \
what the user is looking for, using the provided context. \
Score every query between 0.0 and 1.0 by how likely it is to surface relevant results, \
and explain each query in one short sentence.";

pub fn build_extraction_messages(request: &EnrichmentRequest) -> Vec<Value> {
	let term = serde_json::json!({ "name": "string", "score": "number" });
	let schema = serde_json::json!({
		"identifiers": [term.clone()],
		"platforms": [term.clone()],
		"entities": [term],
	});

	build_messages(EXTRACTION_SYSTEM_PROMPT, &schema, request)
}

pub fn build_rewrite_messages(request: &EnrichmentRequest) -> Vec<Value> {
	let schema = serde_json::json!({
		"queries": [
			{ "enriched_query": "string", "explanation": "string", "score": "number" }
		]
	});

	build_messages(REWRITE_SYSTEM_PROMPT, &schema, request)
}

fn build_messages(system_prompt: &str, schema: &Value, request: &EnrichmentRequest) -> Vec<Value> {
	let schema_text =
		serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string());
	let mut system_prompt = system_prompt.to_string();

	if request.use_thinking {
		system_prompt.push_str(
			" Think the task through step by step before answering, \
but output only the final JSON.",
		);
	}

	let max_queries =
		request.limit().map(|limit| limit.to_string()).unwrap_or_else(|| "none".to_string());
	let mut user_prompt = format!(
		"Return JSON matching this exact schema:\n{schema_text}\nConstraints:\n- MAX_QUERIES = {max_queries}"
	);

	for (label, value) in [
		("Rules", request.text_rules.as_deref()),
		("Identifier context", request.identifier_context.as_deref()),
		("Search reason", request.search_reason_context.as_deref()),
	] {
		if let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) {
			user_prompt.push_str(&format!("\n{label}:\n{value}"));
		}
	}

	user_prompt.push_str(&format!("\nOriginal query:\n{}", request.query));

	vec![
		serde_json::json!({ "role": "system", "content": system_prompt }),
		serde_json::json!({ "role": "user", "content": user_prompt }),
	]
}
