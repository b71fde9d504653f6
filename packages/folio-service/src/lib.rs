mod error;

pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

use folio_config::Config;
use folio_domain::Collection;
use folio_search::SearchClient;

/// Inbound search parameters. Absent counts decode as zero, mirroring the
/// engine's own "return nothing" semantics for a zero size; neither count has
/// an enforced upper bound here (the engine may reject or clamp).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchRequest {
	pub query: String,
	#[serde(default)]
	pub size: u32,
	#[serde(default)]
	pub k: u32,
}

/// The per-request pipeline: build the engine query, invoke the engine,
/// derive the collection's display fields, stamp traceability ids, serialize.
/// Holds the only process-wide state (config and the engine client), both
/// immutable after startup.
pub struct FolioService {
	cfg: Config,
	client: SearchClient,
}
impl FolioService {
	pub fn new(cfg: Config) -> Result<Self> {
		let client = SearchClient::new(&cfg.engine)?;

		Ok(Self { cfg, client })
	}

	pub fn client(&self) -> &SearchClient {
		&self.client
	}

	pub async fn search(&self, collection: Collection, request: &SearchRequest) -> Result<Vec<u8>> {
		if request.query.trim().is_empty() {
			return Err(Error::InvalidRequest { message: "query must be non-empty.".to_string() });
		}

		let body = folio_search::build_query(
			collection,
			&self.cfg.engine.model_id,
			&request.query,
			request.size,
			request.k,
		);
		let hits = self.client.search(collection, &body).await?;

		tracing::debug!(collection = collection.slug(), hits = hits.len(), "Search completed.");

		let processed = folio_domain::process(hits, collection);

		Ok(folio_domain::serialize(&processed)?)
	}
}
