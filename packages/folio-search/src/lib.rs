mod client;
mod error;
mod query;

pub use client::SearchClient;
pub use error::{Error, Result};
pub use query::build_query;
