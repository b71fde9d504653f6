use std::sync::Arc;

use folio_service::FolioService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<FolioService>,
}
impl AppState {
	pub fn new(config: folio_config::Config) -> folio_service::Result<Self> {
		let service = FolioService::new(config)?;

		Ok(Self { service: Arc::new(service) })
	}
}
