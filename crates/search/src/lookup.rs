//! The upstream lookup contract.
//!
//! The orchestrator treats the catalog service as an opaque async function:
//! given a query it eventually yields either a finite ordered list of entries
//! or a [`LookupError`]. Prompting, transport and response schema are the
//! implementor's business.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use vitrine_primitives::{SearchQuery, SoftwareEntry};

mod decode;
mod fixture;


pub use decode::decode_catalog_payload;
pub use fixture::{DEFAULT_RESULT_LIMIT, FixtureCatalog};

/// Failure of a single lookup.
///
/// These are diagnostics; the user only ever sees the configured failure message.
#[derive(Debug, Error)]
pub enum LookupError {
	/// The upstream service could not be reached or refused the request.
	#[error("upstream request failed: {0}")]
	Transport(String),

	/// The upstream answered with something that is not JSON.
	#[error("upstream payload is not valid JSON: {0}")]
	Payload(#[from] serde_json::Error),

	/// An item in the upstream list does not match the entry schema.
	#[error("catalog entry {index} violates the entry schema: {source}")]
	Schema {
		/// Position of the offending item in the list.
		index: usize,
		/// The underlying decode error.
		source: serde_json::Error,
	},

	/// Error reading a local catalog file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The lookup task died before producing an answer.
	#[error("lookup task aborted: {0}")]
	Aborted(String),
}

/// Asynchronous catalog lookup.
///
/// Implementations must complete exactly once per call; partial or streamed
/// results are not supported.
#[async_trait]
pub trait CatalogLookup: Send + Sync + 'static {
	/// Looks up entries matching `query`, in upstream order.
	async fn lookup(&self, query: &SearchQuery) -> Result<Vec<SoftwareEntry>, LookupError>;
}
