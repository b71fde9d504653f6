use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub engine: Engine,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Engine {
	pub endpoint: String,
	pub username: String,
	pub password: String,
	/// Id of the deployed embedding model the neural query runs through.
	pub model_id: String,
	/// Per-request deadline for engine calls. The original deployment had
	/// none and blocked indefinitely on an absent upstream.
	pub timeout_ms: u64,
	/// Disables TLS certificate validation toward the engine. Risky; the
	/// observed deployment runs with this enabled.
	#[serde(default)]
	pub accept_invalid_certs: bool,
}
