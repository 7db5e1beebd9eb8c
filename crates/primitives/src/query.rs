use crate::filter::FilterId;

/// A (term, filter) pair the user asked to search for.
///
/// Built fresh on every edit or filter change and never mutated; equality is
/// structural. The term is stored trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchQuery {
	term: String,
	filter: FilterId,
}

impl SearchQuery {
	/// Creates a query, trimming the term.
	pub fn new(term: impl AsRef<str>, filter: FilterId) -> Self {
		Self {
			term: term.as_ref().trim().to_string(),
			filter,
		}
	}

	/// Returns the normalized search term.
	pub fn term(&self) -> &str {
		&self.term
	}

	/// Returns the active filter.
	pub const fn filter(&self) -> FilterId {
		self.filter
	}

	/// Returns the term length in Unicode scalar values.
	pub fn term_len(&self) -> usize {
		self.term.chars().count()
	}

	/// Returns true when the term is empty, meaning "show a broad default set".
	pub fn is_broad(&self) -> bool {
		self.term.is_empty()
	}
}
