use folio_domain::{Collection, FieldValue, Hit, process, serialize};

fn text_hit(id: &str, fields: &[(&str, &str)]) -> Hit {
	Hit {
		id: id.to_string(),
		score: None,
		source: fields
			.iter()
			.map(|(key, value)| (key.to_string(), FieldValue::Text(value.to_string())))
			.collect(),
	}
}

#[test]
fn preserves_hit_count_and_order() {
	let hits: Vec<Hit> =
		(0..17).map(|rank| text_hit(&format!("id-{rank}"), &[("title", "t")])).collect();
	let processed = process(hits, Collection::ArabicPoems);

	assert_eq!(processed.len(), 17);

	for (rank, hit) in processed.iter().enumerate() {
		assert_eq!(hit.id, format!("id-{rank}"));
	}
}

#[test]
fn identity_collections_only_gain_results_id() {
	for collection in [Collection::Loc, Collection::Openalex] {
		let processed =
			process(vec![text_hit("7", &[("title", "t"), ("abstract", "a")])], collection);
		let source = &processed[0].source;
		let derived: Vec<&str> =
			source.keys().filter(|key| key.starts_with("Results")).map(String::as_str).collect();

		assert_eq!(derived, vec!["Results_id"]);
		assert_eq!(source.get("Results_id"), Some(&FieldValue::Text("7\t7".to_string())));
	}
}

#[test]
fn every_text_field_ends_with_one_id_token() {
	let processed = process(
		vec![text_hit("42", &[
			("title", "X"),
			("translation", "Y"),
			("interpretation", "Z"),
			("text", "RAW"),
		])],
		Collection::CleanedDutchtext,
	);

	for (key, value) in &processed[0].source {
		let FieldValue::Text(text) = value else {
			panic!("unexpected non-text field {key}");
		};
		let suffix = "\t42";

		assert!(text.ends_with(suffix), "{key} missing id suffix: {text:?}");
		assert_eq!(text.matches(suffix).count(), 1, "{key} suffixed more than once");
	}
}

#[test]
fn serialized_output_round_trips() {
	let hits = vec![
		text_hit("a", &[("title", "first")]),
		text_hit("b", &[("title", "second")]),
	];
	let processed = process(hits, Collection::ArabicPoems);
	let bytes = serialize(&processed).expect("serialization failed");
	let parsed: Vec<Hit> = serde_json::from_slice(&bytes).expect("output is not valid JSON");

	assert_eq!(parsed.len(), processed.len());

	for (reparsed, original) in parsed.iter().zip(&processed) {
		assert_eq!(reparsed.id, original.id);
		assert_eq!(reparsed.source, original.source);
	}
}

#[test]
fn wire_names_keep_engine_envelope_shape() {
	let processed = process(vec![text_hit("9", &[("title", "t")])], Collection::Loc);
	let bytes = serialize(&processed).expect("serialization failed");
	let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

	assert_eq!(value[0]["_id"], "9");
	assert_eq!(value[0]["_source"]["title"], "t\t9");
}
