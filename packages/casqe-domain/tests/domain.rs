use casqe_domain::{
	AdvancedCandidate, BasicCandidate, CandidateTable, ExtractedTerm, ExtractedTerms, Origin,
	UnifiedCandidate, generate_basic_candidates, merge, merge_filtered,
};

fn term(name: &str, score: f64) -> ExtractedTerm {
	ExtractedTerm::new(name, score)
}

fn enes_terms() -> ExtractedTerms {
	ExtractedTerms {
		identifiers: vec![term("Enes", 1.0)],
		platforms: vec![term("EETECH", 0.9)],
		entities: vec![term("karaposu", 0.8)],
	}
}

fn advanced(query: &str, score: f64) -> AdvancedCandidate {
	AdvancedCandidate::new(query, score, None)
}

fn queries(candidates: &[UnifiedCandidate]) -> Vec<&str> {
	candidates.iter().map(|candidate| candidate.query.as_str()).collect()
}

#[test]
fn generates_pairs_then_triples_per_identifier() {
	let candidates = generate_basic_candidates(&enes_terms());
	let combined: Vec<(&str, f64)> = candidates
		.iter()
		.map(|candidate| (candidate.combined(), candidate.combined_score()))
		.collect();

	assert_eq!(combined, vec![
		("Enes EETECH", 0.9),
		("Enes karaposu", 0.8),
		("Enes EETECH karaposu", 0.72),
	]);
}

#[test]
fn cross_product_size_matches_collections() {
	let terms = ExtractedTerms {
		identifiers: vec![term("Enes", 1.0), term("Enes Kuzucu", 0.9)],
		platforms: vec![term("GitHub", 0.9), term("LinkedIn", 0.7), term("X", 0.5)],
		entities: vec![term("EETECH", 0.8), term("karaposu", 0.6)],
	};
	let candidates = generate_basic_candidates(&terms);

	// Per identifier: 3 platforms + 2 entities + 3 * 2 triples.
	assert_eq!(candidates.len(), 2 * (3 + 2 + 6));
	assert_eq!(candidates[0].identifier(), "Enes");
	assert_eq!(candidates[11].identifier(), "Enes Kuzucu");
}

#[test]
fn empty_platforms_yield_no_candidates() {
	let terms = ExtractedTerms {
		identifiers: vec![term("A", 1.0)],
		platforms: Vec::new(),
		entities: vec![term("E", 1.0)],
	};

	assert!(generate_basic_candidates(&terms).is_empty());
}

#[test]
fn empty_entities_yield_no_candidates() {
	let terms = ExtractedTerms {
		identifiers: vec![term("A", 1.0)],
		platforms: vec![term("P", 1.0)],
		entities: Vec::new(),
	};

	assert!(generate_basic_candidates(&terms).is_empty());
}

#[test]
fn identifiers_alone_yield_no_candidates() {
	let terms = ExtractedTerms { identifiers: vec![term("A", 1.0)], ..Default::default() };

	assert!(generate_basic_candidates(&terms).is_empty());
}

#[test]
fn combined_text_drops_case_insensitive_repeats() {
	let candidate = BasicCandidate::combine(
		&term("Acme", 1.0),
		Some(&term("acme", 0.9)),
		Some(&term("X", 0.5)),
	);

	assert_eq!(candidate.combined(), "Acme X");
	// Suppressed text still contributes its score.
	assert_eq!(candidate.combined_score(), 0.45);
	assert_eq!(candidate.platform(), Some("acme"));
}

#[test]
fn combined_score_never_increases_with_more_components() {
	let identifier = term("Enes", 0.93);
	let platform = term("GitHub", 0.71);
	let entity = term("EETECH", 0.64);
	let alone = BasicCandidate::combine(&identifier, None, None).combined_score();
	let with_platform =
		BasicCandidate::combine(&identifier, Some(&platform), None).combined_score();
	let with_both =
		BasicCandidate::combine(&identifier, Some(&platform), Some(&entity)).combined_score();

	assert_eq!(alone, 0.93);
	assert!(with_platform <= alone);
	assert!(with_both <= with_platform);
}

#[test]
fn combined_score_rounds_to_three_decimals() {
	let candidate =
		BasicCandidate::combine(&term("a", 0.333), Some(&term("b", 0.777)), Some(&term("c", 0.5)));

	assert_eq!(candidate.combined_score(), 0.129);
	assert_eq!(
		candidate.to_string(),
		"a b c, combined_scr=0.129, identifier=a, platform=b, entity=c"
	);
}

#[test]
fn combined_score_rounds_exact_halves_to_even() {
	let quarter = BasicCandidate::combine(&term("a", 0.25), Some(&term("b", 0.25)), None);
	let half = BasicCandidate::combine(&term("a", 0.5), None, Some(&term("c", 0.625)));

	assert_eq!(quarter.combined_score(), 0.062);
	assert_eq!(half.combined_score(), 0.312);
}

#[test]
fn empty_names_are_left_out_of_the_query() {
	let empty_platform = BasicCandidate::combine(&term("Enes", 1.0), Some(&term("", 0.9)), None);
	let empty_entity = BasicCandidate::combine(
		&term("Enes", 1.0),
		Some(&term("GitHub", 0.9)),
		Some(&term("", 0.8)),
	);

	assert_eq!(empty_platform.combined(), "Enes");
	assert_eq!(empty_platform.platform(), Some(""));
	assert_eq!(empty_platform.combined_score(), 0.9);
	assert_eq!(empty_entity.combined(), "Enes GitHub");
}

#[test]
fn advanced_duplicate_with_higher_score_wins() {
	let basic = generate_basic_candidates(&enes_terms());
	let merged = merge(&basic, &[advanced("Enes EETECH karaposu", 0.95)], None);
	let matching: Vec<&UnifiedCandidate> =
		merged.iter().filter(|c| c.query.eq_ignore_ascii_case("enes eetech karaposu")).collect();

	assert_eq!(matching.len(), 1);
	assert_eq!(matching[0].score, 0.95);
	assert_eq!(matching[0].origin, Origin::Advanced);
	assert_eq!(queries(&merged), vec!["Enes EETECH karaposu", "Enes EETECH", "Enes karaposu"]);
}

#[test]
fn case_insensitive_duplicates_collapse_to_higher_score() {
	let merged = merge(&[], &[advanced("John Doe", 0.4), advanced("john doe", 0.7)], None);

	assert_eq!(merged.len(), 1);
	assert_eq!(merged[0].query, "john doe");
	assert_eq!(merged[0].score, 0.7);
}

#[test]
fn equal_scores_keep_first_seen_basic_entry() {
	let basic = generate_basic_candidates(&enes_terms());
	let merged = merge(&basic, &[advanced("enes eetech", 0.9)], None);
	let entry = merged.iter().find(|c| c.query.to_lowercase() == "enes eetech").expect("missing");

	assert_eq!(entry.origin, Origin::Basic);
	assert_eq!(entry.query, "Enes EETECH");
}

#[test]
fn equal_scores_keep_insertion_order() {
	let candidates = [advanced("first", 0.5), advanced("second", 0.5), advanced("top", 0.6)];
	let merged = merge(&[], &candidates, None);

	assert_eq!(queries(&merged), vec!["top", "first", "second"]);
}

#[test]
fn limit_returns_top_candidates() {
	let candidates = vec![
		advanced("a", 0.1),
		advanced("b", 0.9),
		advanced("c", 0.5),
		advanced("d", 0.7),
		advanced("e", 0.3),
	];

	assert_eq!(queries(&merge(&[], &candidates, Some(2))), vec!["b", "d"]);
	assert_eq!(merge(&[], &candidates, Some(0)).len(), 5);
	assert_eq!(merge(&[], &candidates, None).len(), 5);
	assert_eq!(merge(&[], &candidates, Some(50)).len(), 5);
}

#[test]
fn empty_queries_never_appear() {
	let merged = merge(&[], &[advanced("", 0.99), advanced("kept", 0.1)], None);

	assert_eq!(queries(&merged), vec!["kept"]);
}

#[test]
fn merging_result_again_is_stable() {
	let basic = generate_basic_candidates(&enes_terms());
	let first = merge(&basic, &[advanced("Enes Kuzucu", 0.85), advanced("enes eetech", 0.2)], None);
	let mut table = CandidateTable::new();

	table.extend(first.iter().cloned());
	table.extend(first.iter().cloned());

	let second = table.into_ranked();

	assert_eq!(second, first);
}

#[test]
fn score_filter_applies_before_limit() {
	let candidates =
		vec![advanced("a", 0.9), advanced("b", 0.2), advanced("c", 0.6), advanced("d", 0.55)];
	let merged = merge_filtered(&[], &candidates, Some(2), Some(0.5));

	assert_eq!(queries(&merged), vec!["a", "c"]);

	let merged = merge_filtered(&[], &candidates, None, Some(0.58));

	assert_eq!(queries(&merged), vec!["a", "c"]);
}

#[test]
fn explanations_survive_merge() {
	let merged = merge(&[], &[AdvancedCandidate::new("q", 0.5, Some("why".to_string()))], None);

	assert_eq!(merged[0].explanation.as_deref(), Some("why"));
}
