use serde_json::{Map, Value, json};

use folio_domain::Collection;

/// Builds the engine search body: exclude the stored vector field from the
/// returned source, run a neural query against it with the caller's text and
/// neighbor count, cap the result size. Pure function of its inputs and the
/// collection table. The query text travels as a typed JSON string, so query
/// syntax or control characters inside it stay inert on the wire.
pub fn build_query(collection: Collection, model_id: &str, query: &str, size: u32, k: u32) -> Value {
	let vector_field = collection.vector_field();
	let mut neural = Map::new();

	neural.insert(
		vector_field.to_string(),
		json!({
			"query_text": query,
			"model_id": model_id,
			"k": k,
		}),
	);

	json!({
		"_source": { "excludes": [vector_field] },
		"query": { "neural": neural },
		"size": size,
	})
}
