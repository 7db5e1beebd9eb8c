//! Request issuance and last-request-wins resolution.
//!
//! Every lookup gets the next [`RequestToken`] and becomes the single
//! outstanding request. Lookups run as background tasks and report back
//! through a channel; [`RequestSequencer::resolve`] accepts a completion only
//! if its token is still the outstanding one. Superseded requests are not
//! aborted, their results are simply never written.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, trace};
use vitrine_primitives::{RequestToken, SearchQuery, SoftwareEntry};
use vitrine_worker::{GenerationClock, TaskClass, join_error_message, spawn};

use crate::lookup::{CatalogLookup, LookupError};

/// Message sent back from a lookup task when it finishes.
#[derive(Debug)]
pub struct LookupCompletion {
	/// Token the request was issued with.
	pub token: RequestToken,
	/// Query the request answered.
	pub query: SearchQuery,
	/// Lookup outcome.
	pub outcome: Result<Vec<SoftwareEntry>, LookupError>,
}

/// Issues lookups and decides which completion may write state.
pub struct RequestSequencer {
	clock: GenerationClock,
	outstanding: Option<RequestToken>,
	completion_tx: mpsc::UnboundedSender<LookupCompletion>,
	completion_rx: mpsc::UnboundedReceiver<LookupCompletion>,
}

impl Default for RequestSequencer {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for RequestSequencer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RequestSequencer")
			.field("issued", &self.clock.current())
			.field("outstanding", &self.outstanding)
			.finish()
	}
}

impl RequestSequencer {
	/// Creates a sequencer with no outstanding request.
	pub fn new() -> Self {
		let (completion_tx, completion_rx) = mpsc::unbounded_channel();
		Self {
			clock: GenerationClock::new(),
			outstanding: None,
			completion_tx,
			completion_rx,
		}
	}

	/// Starts a lookup for `query` and makes it the outstanding request.
	///
	/// Any previously outstanding request is superseded. Exactly one lookup
	/// call is made per invocation; nothing is deduplicated or retried.
	///
	/// Must be called from within a Tokio runtime context.
	pub fn issue(&mut self, query: SearchQuery, lookup: Arc<dyn CatalogLookup>) -> RequestToken {
		let token = RequestToken::new(self.clock.next());
		if let Some(previous) = self.outstanding.replace(token) {
			debug!(superseded = previous.get(), token = token.get(), "search.supersede");
		}
		debug!(token = token.get(), term = query.term(), filter = %query.filter(), "search.issue");

		let request = query.clone();
		let task = spawn(TaskClass::Network, async move { lookup.lookup(&request).await });

		let tx = self.completion_tx.clone();
		spawn(TaskClass::Interactive, async move {
			let outcome = match task.await {
				Ok(outcome) => outcome,
				Err(err) => Err(LookupError::Aborted(join_error_message(err))),
			};
			let _ = tx.send(LookupCompletion { token, query, outcome });
		});

		token
	}

	/// Forgets the outstanding request so that its completion is discarded.
	pub fn invalidate(&mut self) {
		if let Some(previous) = self.outstanding.take() {
			debug!(token = previous.get(), "search.invalidate");
		}
	}

	/// Accepts `token` if it belongs to the outstanding request, clearing it.
	pub fn resolve(&mut self, token: RequestToken) -> bool {
		if self.outstanding == Some(token) {
			self.outstanding = None;
			true
		} else {
			trace!(token = token.get(), outstanding = ?self.outstanding.map(RequestToken::get), "search.stale");
			false
		}
	}

	/// Returns the outstanding request token, if any.
	pub fn outstanding(&self) -> Option<RequestToken> {
		self.outstanding
	}

	/// Returns true while a request is outstanding.
	pub fn is_pending(&self) -> bool {
		self.outstanding.is_some()
	}

	/// Returns a completion that is already waiting, without blocking.
	///
	/// Completions are returned regardless of staleness; pass the token to
	/// [`Self::resolve`] to decide.
	pub fn try_completion(&mut self) -> Option<LookupCompletion> {
		self.completion_rx.try_recv().ok()
	}

	/// Waits for the next completion. Cancel-safe.
	pub async fn completion(&mut self) -> Option<LookupCompletion> {
		self.completion_rx.recv().await
	}
}
