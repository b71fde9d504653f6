use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single stored field of a hit. Sources are scalar-only once the vector
/// field is excluded from the engine response; any other JSON shape fails
/// envelope decoding upstream instead of panicking here.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
	Null,
	Number(serde_json::Number),
	Text(String),
}
impl FieldValue {
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}
}

/// The named fields of one hit, schema varying by collection.
pub type SourceMap = BTreeMap<String, FieldValue>;

/// Renders a field for inclusion in a summary string: text as-is, numbers in
/// their decimal form, null or absent fields as the empty string.
pub fn display_text(source: &SourceMap, key: &str) -> String {
	match source.get(key) {
		Some(FieldValue::Text(text)) => text.clone(),
		Some(FieldValue::Number(number)) => number.to_string(),
		Some(FieldValue::Null) | None => String::new(),
	}
}
