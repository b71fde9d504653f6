use serde::{Deserialize, Serialize};

use crate::{Collection, FieldValue, Result, SourceMap};

/// One ranked record from the engine envelope. Processing extends `source`
/// in place; a hit is fully materialized before serialization and not
/// mutated afterward.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Hit {
	#[serde(rename = "_id")]
	pub id: String,
	#[serde(rename = "_score", default, skip_serializing_if = "Option::is_none")]
	pub score: Option<f64>,
	#[serde(rename = "_source", default)]
	pub source: SourceMap,
}

/// Runs the collection's formatter over every hit, then stamps the record id:
/// `Results_id` is set to the id, and every text field (derived or original)
/// gets a trailing tab-separated id token. Derived fields are computed from
/// pre-suffix values only; the suffix pass runs strictly after formatting.
/// Length and order of the input are preserved.
pub fn process(mut hits: Vec<Hit>, collection: Collection) -> Vec<Hit> {
	let format = collection.formatter();

	for hit in &mut hits {
		format(&mut hit.source);
		hit.source.insert("Results_id".to_string(), FieldValue::Text(hit.id.clone()));

		for value in hit.source.values_mut() {
			if let FieldValue::Text(text) = value {
				text.push('\t');
				text.push_str(&hit.id);
			}
		}
	}

	hits
}

/// Flattens processed hits into the response byte sequence, order preserved.
pub fn serialize(hits: &[Hit]) -> Result<Vec<u8>> {
	Ok(serde_json::to_vec(hits)?)
}
