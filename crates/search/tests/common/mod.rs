#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use vitrine_primitives::{FilterId, IconCategory, SearchQuery, SoftwareEntry};
use vitrine_search::{CatalogLookup, LookupError, SearchConfig, SearchMode, SearchOrchestrator};

type Reply = Result<Vec<SoftwareEntry>, LookupError>;

/// Lookup whose calls stay pending until the test answers them.
#[derive(Default)]
pub struct ScriptedLookup {
	calls: Mutex<Vec<Call>>,
}

struct Call {
	query: SearchQuery,
	reply: Option<oneshot::Sender<Reply>>,
}

impl ScriptedLookup {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	/// Number of lookups started so far.
	pub fn call_count(&self) -> usize {
		self.calls.lock().len()
	}

	/// Queries received so far, in call order.
	pub fn queries(&self) -> Vec<SearchQuery> {
		self.calls.lock().iter().map(|call| call.query.clone()).collect()
	}

	/// Yields until at least `n` lookups have started.
	pub async fn wait_for_calls(&self, n: usize) {
		while self.call_count() < n {
			tokio::task::yield_now().await;
		}
	}

	/// Answers call `index` with `reply`.
	pub fn respond(&self, index: usize, reply: Reply) {
		let sender = self.calls.lock()[index].reply.take().expect("call already answered");
		let _ = sender.send(reply);
	}

	pub fn succeed(&self, index: usize, names: &[&str]) {
		self.respond(index, Ok(names.iter().map(|name| entry(name)).collect()));
	}

	pub fn fail(&self, index: usize) {
		self.respond(index, Err(LookupError::Transport("503 Service Unavailable".to_string())));
	}
}

#[async_trait]
impl CatalogLookup for ScriptedLookup {
	async fn lookup(&self, query: &SearchQuery) -> Reply {
		let (tx, rx) = oneshot::channel();
		self.calls.lock().push(Call {
			query: query.clone(),
			reply: Some(tx),
		});
		rx.await.unwrap_or_else(|_| Err(LookupError::Transport("reply dropped".to_string())))
	}
}

pub fn entry(name: &str) -> SoftwareEntry {
	SoftwareEntry {
		name: name.to_string(),
		description: format!("{name} description"),
		tags: vec!["Gestão".to_string()],
		price: "Gratuito".to_string(),
		icon: IconCategory::Generic,
		brazilian: true,
		website: format!("https://{}.example", name.to_lowercase()),
		rating: 4.0,
	}
}

pub fn config(mode: SearchMode) -> SearchConfig {
	SearchConfig {
		mode,
		..SearchConfig::default()
	}
}

pub fn orchestrator(mode: SearchMode, lookup: &Arc<ScriptedLookup>) -> SearchOrchestrator {
	let lookup: Arc<dyn CatalogLookup> = Arc::clone(lookup) as Arc<dyn CatalogLookup>;
	SearchOrchestrator::new(config(mode), lookup)
}

pub fn names(orchestrator: &SearchOrchestrator) -> Vec<String> {
	orchestrator.state().results().iter().map(|e| e.name.clone()).collect()
}

pub fn query(term: &str) -> SearchQuery {
	SearchQuery::new(term, FilterId::All)
}
