//! Observable search state and its transition function.
//!
//! [`SearchState`] is the only thing the view reads. Its fields are private;
//! every change goes through [`SearchState::apply`], which implements the
//! transition table below and nothing else.
//!
//! | Current  | Transition  | Next    | Effect                        |
//! |----------|-------------|---------|-------------------------------|
//! | any      | `Rejected`  | Idle    | clear results, clear error    |
//! | any      | `Issued`    | Pending | keep results, clear error     |
//! | Pending  | `Succeeded` | Ready   | store results                 |
//! | Pending  | `Failed`    | Failed  | clear results, store message  |
//!
//! Staleness is not decided here: the sequencer only forwards `Succeeded` and
//! `Failed` for the most recently issued request.

use tracing::warn;
use vitrine_primitives::{SearchQuery, SoftwareEntry};

/// Coarse lifecycle of the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
	/// No search yet, or the last query was rejected by the gate.
	#[default]
	Idle,
	/// A lookup is in flight.
	Pending,
	/// The latest accepted lookup succeeded.
	Ready,
	/// The latest accepted lookup failed.
	Failed,
}

/// Input to [`SearchState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
	/// The gate rejected `query`.
	Rejected { query: SearchQuery },
	/// A lookup for `query` was issued.
	Issued { query: SearchQuery },
	/// The latest lookup returned `results`.
	Succeeded { results: Vec<SoftwareEntry> },
	/// The latest lookup failed; `message` is user-facing.
	Failed { message: String },
}

/// State observed by the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
	status: SearchStatus,
	results: Vec<SoftwareEntry>,
	error: Option<String>,
	query: Option<SearchQuery>,
	revision: u64,
}

impl SearchState {
	/// Applies a transition, returning false when it is not valid from the
	/// current status and was ignored.
	pub fn apply(&mut self, transition: Transition) -> bool {
		match transition {
			Transition::Rejected { query } => {
				self.status = SearchStatus::Idle;
				self.results.clear();
				self.error = None;
				self.query = Some(query);
			}
			Transition::Issued { query } => {
				self.status = SearchStatus::Pending;
				self.error = None;
				self.query = Some(query);
			}
			Transition::Succeeded { results } => {
				if self.status != SearchStatus::Pending {
					warn!(status = ?self.status, "search.state.unexpected_success");
					return false;
				}
				self.status = SearchStatus::Ready;
				self.results = results;
			}
			Transition::Failed { message } => {
				if self.status != SearchStatus::Pending {
					warn!(status = ?self.status, "search.state.unexpected_failure");
					return false;
				}
				self.status = SearchStatus::Failed;
				self.results.clear();
				self.error = Some(message);
			}
		}
		self.revision = self.revision.wrapping_add(1);
		true
	}

	/// Returns the current status.
	pub const fn status(&self) -> SearchStatus {
		self.status
	}

	/// Returns true while a lookup is in flight.
	pub fn is_loading(&self) -> bool {
		self.status == SearchStatus::Pending
	}

	/// Returns the visible results.
	///
	/// While `Pending` these are the previous results, kept so the view does
	/// not flicker until the new response lands.
	pub fn results(&self) -> &[SoftwareEntry] {
		&self.results
	}

	/// Returns the user-facing error message, set only in `Failed`.
	pub fn error_message(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// Returns the query the state currently answers, if any.
	pub fn query(&self) -> Option<&SearchQuery> {
		self.query.as_ref()
	}

	/// Counter bumped on every applied transition.
	pub const fn revision(&self) -> u64 {
		self.revision
	}
}

#[cfg(test)]
mod tests {
	use vitrine_primitives::FilterId;

	use super::*;

	fn entry(name: &str) -> SoftwareEntry {
		SoftwareEntry {
			name: name.to_string(),
			description: String::new(),
			tags: Vec::new(),
			price: String::new(),
			icon: Default::default(),
			brazilian: false,
			website: String::new(),
			rating: 0.0,
		}
	}

	fn query(term: &str) -> SearchQuery {
		SearchQuery::new(term, FilterId::All)
	}

	#[test]
	fn starts_idle_and_empty() {
		let state = SearchState::default();
		assert_eq!(state.status(), SearchStatus::Idle);
		assert!(state.results().is_empty());
		assert!(state.error_message().is_none());
		assert!(state.query().is_none());
		assert_eq!(state.revision(), 0);
	}

	#[test]
	fn pending_keeps_previous_results() {
		let mut state = SearchState::default();
		assert!(state.apply(Transition::Issued { query: query("crm") }));
		assert!(state.apply(Transition::Succeeded {
			results: vec![entry("RD Station")],
		}));
		assert_eq!(state.status(), SearchStatus::Ready);

		assert!(state.apply(Transition::Issued { query: query("crm online") }));
		assert!(state.is_loading());
		assert_eq!(state.results().len(), 1);
		assert_eq!(state.query(), Some(&query("crm online")));
	}

	#[test]
	fn rejection_clears_results_and_error() {
		let mut state = SearchState::default();
		state.apply(Transition::Issued { query: query("erp") });
		state.apply(Transition::Failed {
			message: "boom".to_string(),
		});
		assert_eq!(state.error_message(), Some("boom"));

		state.apply(Transition::Rejected { query: query("er") });
		assert_eq!(state.status(), SearchStatus::Idle);
		assert!(state.error_message().is_none());
		assert!(state.results().is_empty());
	}

	#[test]
	fn failure_clears_results() {
		let mut state = SearchState::default();
		state.apply(Transition::Issued { query: query("erp") });
		state.apply(Transition::Succeeded { results: vec![entry("Omie")] });
		state.apply(Transition::Issued { query: query("erp nuvem") });
		state.apply(Transition::Failed {
			message: "falhou".to_string(),
		});
		assert_eq!(state.status(), SearchStatus::Failed);
		assert!(state.results().is_empty());
	}

	#[test]
	fn completions_outside_pending_are_ignored() {
		let mut state = SearchState::default();
		let before = state.clone();
		assert!(!state.apply(Transition::Succeeded { results: vec![entry("Omie")] }));
		assert!(!state.apply(Transition::Failed {
			message: "late".to_string(),
		}));
		assert_eq!(state, before);
	}
}
