mod collection;
mod error;
mod format;
mod process;
mod value;

pub use collection::Collection;
pub use error::{Error, Result};
pub use process::{Hit, process, serialize};
pub use value::{FieldValue, SourceMap, display_text};
