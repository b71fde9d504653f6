mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Engine, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.engine.endpoint.trim().is_empty() {
		return Err(Error::Validation { message: "engine.endpoint must be non-empty.".to_string() });
	}
	if cfg.engine.username.trim().is_empty() {
		return Err(Error::Validation { message: "engine.username must be non-empty.".to_string() });
	}
	if cfg.engine.model_id.trim().is_empty() {
		return Err(Error::Validation { message: "engine.model_id must be non-empty.".to_string() });
	}
	if cfg.engine.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "engine.timeout_ms must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	// Index URLs are built as "{endpoint}/{index}/_search".
	while cfg.engine.endpoint.ends_with('/') {
		cfg.engine.endpoint.pop();
	}
}
