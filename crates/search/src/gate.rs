//! Eligibility gate applied before a lookup is issued.

use vitrine_primitives::{FilterId, SearchQuery};

/// Shortest non-empty term that reaches the upstream service.
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

/// Synchronous eligibility predicate for search queries.
///
/// An empty term is eligible and means "show a broad default set". Non-empty
/// terms shorter than the minimum are obviously incomplete; sending them
/// upstream only burns rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryGate {
	min_term_len: usize,
}

impl Default for QueryGate {
	fn default() -> Self {
		Self::new(DEFAULT_MIN_TERM_LEN)
	}
}

impl QueryGate {
	/// Creates a gate requiring at least `min_term_len` characters for non-empty terms.
	pub const fn new(min_term_len: usize) -> Self {
		Self { min_term_len }
	}

	/// Returns the minimum non-empty term length.
	pub const fn min_term_len(&self) -> usize {
		self.min_term_len
	}

	/// Returns true if a search for `term` under `filter` may be issued.
	///
	/// Every filter is gated the same way; the parameter keeps the predicate
	/// defined over the full query.
	pub fn is_eligible(&self, term: &str, filter: FilterId) -> bool {
		self.admits(&SearchQuery::new(term, filter))
	}

	/// Returns true if `query` may be issued.
	pub fn admits(&self, query: &SearchQuery) -> bool {
		query.is_broad() || query.term_len() >= self.min_term_len
	}
}
