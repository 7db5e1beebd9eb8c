use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use vitrine_primitives::{SearchQuery, SoftwareEntry};

use super::{CatalogLookup, LookupError, decode_catalog_payload};

/// Maximum number of entries a single lookup returns.
pub const DEFAULT_RESULT_LIMIT: usize = 12;

/// Lookup backed by a fixed, in-memory catalog.
///
/// Emulates the upstream service: filters are applied locally, every
/// whitespace-separated word of the term must appear in the name, description
/// or tags, and results keep catalog order. An optional latency makes
/// overlapping requests observable.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
	entries: Vec<SoftwareEntry>,
	latency: Duration,
	limit: usize,
}

impl FixtureCatalog {
	/// Creates a catalog over `entries` with no latency.
	pub fn new(entries: Vec<SoftwareEntry>) -> Self {
		Self {
			entries,
			latency: Duration::ZERO,
			limit: DEFAULT_RESULT_LIMIT,
		}
	}

	/// Builds a catalog from an upstream-shaped JSON document.
	pub fn from_json(text: &str) -> Result<Self, LookupError> {
		decode_catalog_payload(text).map(Self::new)
	}

	/// Loads a catalog from a JSON file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, LookupError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| LookupError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::from_json(&content)
	}

	/// Sets the simulated response latency.
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	/// Caps the number of entries returned per lookup.
	pub fn with_limit(mut self, limit: usize) -> Self {
		self.limit = limit;
		self
	}

	/// Returns the number of entries in the catalog.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the catalog holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the entries matching `query` without simulated latency.
	pub fn search(&self, query: &SearchQuery) -> Vec<SoftwareEntry> {
		let term = query.term().to_lowercase();
		let words: Vec<&str> = term.split_whitespace().collect();
		self.entries
			.iter()
			.filter(|entry| query.filter().admits(entry))
			.filter(|entry| words.iter().all(|word| entry.mentions(word)))
			.take(self.limit)
			.cloned()
			.collect()
	}
}

#[async_trait]
impl CatalogLookup for FixtureCatalog {
	async fn lookup(&self, query: &SearchQuery) -> Result<Vec<SoftwareEntry>, LookupError> {
		if !self.latency.is_zero() {
			tokio::time::sleep(self.latency).await;
		}
		let results = self.search(query);
		debug!(term = query.term(), filter = %query.filter(), hits = results.len(), "fixture.lookup");
		Ok(results)
	}
}
