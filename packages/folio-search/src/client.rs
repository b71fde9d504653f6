use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use folio_domain::{Collection, Hit};

use crate::{Error, Result};

/// Handle to the backing search engine. Built once at startup from config and
/// shared read-only across requests.
#[derive(Clone, Debug)]
pub struct SearchClient {
	http: Client,
	endpoint: String,
	username: String,
	password: String,
}
impl SearchClient {
	pub fn new(cfg: &folio_config::Engine) -> Result<Self> {
		if cfg.accept_invalid_certs {
			tracing::warn!("TLS certificate validation for the search engine is disabled.");
		}

		let http = Client::builder()
			.timeout(Duration::from_millis(cfg.timeout_ms))
			.danger_accept_invalid_certs(cfg.accept_invalid_certs)
			.build()?;

		Ok(Self {
			http,
			endpoint: cfg.endpoint.clone(),
			username: cfg.username.clone(),
			password: cfg.password.clone(),
		})
	}

	/// Engine reachability probe, used to fail fast before serving traffic.
	pub async fn ping(&self) -> Result<()> {
		self.http
			.get(&self.endpoint)
			.basic_auth(&self.username, Some(&self.password))
			.send()
			.await?
			.error_for_status()?;

		Ok(())
	}

	/// One search call against the collection's backing index. Unwraps the
	/// ranked hits from the response envelope, preserving engine-assigned
	/// order. Transport failures, non-success statuses, and envelopes without
	/// a `hits.hits` array all surface as recoverable errors.
	pub async fn search(&self, collection: Collection, body: &Value) -> Result<Vec<Hit>> {
		let url = format!("{}/{}/_search", self.endpoint, collection.index());
		let res = self
			.http
			.post(url)
			.basic_auth(&self.username, Some(&self.password))
			.json(body)
			.send()
			.await?;
		let envelope: Value = res.error_for_status()?.json().await?;

		unwrap_hits(envelope)
	}
}

fn unwrap_hits(envelope: Value) -> Result<Vec<Hit>> {
	let hits = envelope
		.get("hits")
		.and_then(|value| value.get("hits"))
		.and_then(Value::as_array)
		.ok_or_else(|| Error::InvalidEnvelope {
			message: "Search response is missing the hits.hits array.".to_string(),
		})?;

	hits.iter().map(|hit| Ok(serde_json::from_value(hit.clone())?)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unwraps_hits_in_envelope_order() {
		let envelope = serde_json::json!({
			"took": 3,
			"hits": {
				"total": { "value": 2 },
				"hits": [
					{ "_id": "b", "_score": 0.9, "_source": { "title": "second-ranked" } },
					{ "_id": "a", "_score": 0.4, "_source": { "title": "first-ranked" } }
				]
			}
		});
		let hits = unwrap_hits(envelope).expect("unwrap failed");

		assert_eq!(hits.len(), 2);
		assert_eq!(hits[0].id, "b");
		assert_eq!(hits[1].id, "a");
		assert_eq!(hits[0].score, Some(0.9));
	}

	#[test]
	fn missing_hits_array_is_a_recoverable_error() {
		let envelope = serde_json::json!({ "error": { "reason": "index_not_found_exception" } });

		assert!(matches!(unwrap_hits(envelope), Err(Error::InvalidEnvelope { .. })));
	}

	#[test]
	fn nested_source_values_fail_decoding() {
		let envelope = serde_json::json!({
			"hits": { "hits": [ { "_id": "a", "_source": { "tags": ["x", "y"] } } ] }
		});

		assert!(matches!(unwrap_hits(envelope), Err(Error::Decode(_))));
	}

	#[test]
	fn builds_a_client_from_engine_config() {
		let cfg = folio_config::Engine {
			endpoint: "https://localhost:9200".to_string(),
			username: "admin".to_string(),
			password: "admin".to_string(),
			model_id: "m".to_string(),
			timeout_ms: 1_000,
			accept_invalid_certs: true,
		};

		assert!(SearchClient::new(&cfg).is_ok());
	}
}
