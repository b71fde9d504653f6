pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error(transparent)]
	Backend(#[from] folio_search::Error),
	#[error(transparent)]
	Serialization(#[from] folio_domain::Error),
}
