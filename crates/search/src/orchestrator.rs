//! The search request orchestrator.
//!
//! # Event loop integration
//!
//! The orchestrator is owned by one event loop. Input events are handled
//! synchronously through [`SearchOrchestrator::term_changed`],
//! [`SearchOrchestrator::filter_changed`] and [`SearchOrchestrator::submit`].
//! Background work (debounce timers and lookups) reports back through
//! channels; the owner either awaits [`SearchOrchestrator::tick`] inside its
//! `select!` or calls [`SearchOrchestrator::drain`] once per frame. Both
//! return whether the observable state changed and needs rendering.

use std::sync::Arc;

use tracing::{debug, error, info, trace};
use vitrine_primitives::{FilterId, SearchQuery};

use crate::config::{SearchConfig, SearchMode};
use crate::debounce::Debouncer;
use crate::gate::QueryGate;
use crate::lookup::CatalogLookup;
use crate::sequencer::{LookupCompletion, RequestSequencer};
use crate::state::{SearchState, Transition};

/// Drives searches from raw user input and owns the observable [`SearchState`].
pub struct SearchOrchestrator {
	config: SearchConfig,
	gate: QueryGate,
	debouncer: Debouncer<String>,
	sequencer: RequestSequencer,
	lookup: Arc<dyn CatalogLookup>,
	state: SearchState,
	filter: FilterId,
	settled_term: String,
}

impl std::fmt::Debug for SearchOrchestrator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SearchOrchestrator")
			.field("mode", &self.config.mode)
			.field("filter", &self.filter)
			.field("debouncer", &self.debouncer)
			.field("sequencer", &self.sequencer)
			.field("state", &self.state)
			.finish()
	}
}

impl SearchOrchestrator {
	/// Creates an orchestrator in the `Idle` state. No request is made until
	/// [`Self::start`] or the first input event.
	pub fn new(config: SearchConfig, lookup: Arc<dyn CatalogLookup>) -> Self {
		Self {
			gate: QueryGate::new(config.min_term_len),
			debouncer: Debouncer::new(config.debounce(), String::new()),
			sequencer: RequestSequencer::new(),
			filter: config.initial_filter,
			settled_term: String::new(),
			state: SearchState::default(),
			lookup,
			config,
		}
	}

	/// Issues the initial broad search for the empty term.
	///
	/// Must be called from within a Tokio runtime context, as must every
	/// other input method.
	pub fn start(&mut self) {
		info!(mode = %self.config.mode, filter = %self.filter, "search.start");
		self.evaluate(String::new());
	}

	/// Returns the observable state.
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	/// Returns the active configuration.
	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// Returns the raw term as last typed, settled or not.
	pub fn term(&self) -> &str {
		self.debouncer.latest()
	}

	/// Returns the active filter.
	pub const fn filter(&self) -> FilterId {
		self.filter
	}

	/// Returns true when no debounce timer or lookup is outstanding.
	pub fn is_idle(&self) -> bool {
		!self.debouncer.is_pending() && !self.sequencer.is_pending()
	}

	/// Handles a term edit from the view.
	///
	/// In auto mode the edit is debounced and searched once typing pauses; in
	/// submit mode it is only recorded.
	pub fn term_changed(&mut self, term: impl Into<String>) {
		let term = term.into();
		match self.config.mode {
			SearchMode::AutoSearchOnType => {
				self.debouncer.push(term);
			}
			SearchMode::SearchOnSubmit => self.debouncer.replace(term),
		}
	}

	/// Handles a filter selection from the view. Returns true if the state changed.
	///
	/// Selecting the active filter again is not a change. Otherwise the search
	/// is re-issued at once, superseding any request in flight. Auto mode uses
	/// the last settled term, submit mode the latest typed one.
	pub fn filter_changed(&mut self, filter: FilterId) -> bool {
		if filter == self.filter {
			return false;
		}
		self.filter = filter;
		let term = match self.config.mode {
			SearchMode::AutoSearchOnType => self.settled_term.clone(),
			SearchMode::SearchOnSubmit => self.debouncer.latest().clone(),
		};
		self.evaluate(term)
	}

	/// Searches the latest typed term right away. Returns true if the state changed.
	///
	/// Cancels any pending debounce so the same term is not searched twice.
	/// Submitting an unchanged query issues a fresh, independent request.
	pub fn submit(&mut self) -> bool {
		let term = self.debouncer.flush();
		self.settled_term.clone_from(&term);
		self.evaluate(term)
	}

	/// Waits for the next background event and applies it.
	///
	/// Returns true if the state changed. Cancel-safe, so it can sit in a
	/// `select!` next to the view's input stream.
	pub async fn tick(&mut self) -> bool {
		tokio::select! {
			term = self.debouncer.settled() => self.on_settled(term),
			Some(completion) = self.sequencer.completion() => self.on_completion(completion),
		}
	}

	/// Applies every background event that is already waiting, without blocking.
	///
	/// Returns true if the state changed.
	pub fn drain(&mut self) -> bool {
		let mut changed = false;
		while let Some(term) = self.debouncer.try_settled() {
			changed |= self.on_settled(term);
		}
		while let Some(completion) = self.sequencer.try_completion() {
			changed |= self.on_completion(completion);
		}
		changed
	}

	/// Runs [`Self::tick`] until nothing is outstanding.
	pub async fn settle(&mut self) {
		while !self.is_idle() {
			self.tick().await;
		}
	}

	fn on_settled(&mut self, term: String) -> bool {
		if term.trim() == self.settled_term.trim() {
			trace!(term = %term, "search.term_unchanged");
			return false;
		}
		debug!(term = %term, "search.term_settled");
		self.settled_term.clone_from(&term);
		self.evaluate(term)
	}

	fn evaluate(&mut self, term: String) -> bool {
		let query = SearchQuery::new(term, self.filter);
		if self.gate.admits(&query) {
			self.sequencer.issue(query.clone(), Arc::clone(&self.lookup));
			self.state.apply(Transition::Issued { query })
		} else {
			debug!(term = query.term(), min = self.gate.min_term_len(), "search.gate_rejected");
			self.sequencer.invalidate();
			self.state.apply(Transition::Rejected { query })
		}
	}

	fn on_completion(&mut self, completion: LookupCompletion) -> bool {
		let LookupCompletion { token, query, outcome } = completion;
		if !self.sequencer.resolve(token) {
			debug!(token = token.get(), term = query.term(), "search.discard_stale");
			return false;
		}

		match outcome {
			Ok(results) => {
				debug!(token = token.get(), hits = results.len(), "search.ready");
				self.state.apply(Transition::Succeeded { results })
			}
			Err(err) => {
				error!(token = token.get(), term = query.term(), filter = %query.filter(), error = %err, "search.failed");
				self.state.apply(Transition::Failed {
					message: self.config.failure_message.clone(),
				})
			}
		}
	}
}
