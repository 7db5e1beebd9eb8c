//! Search request orchestration for the software catalog.
//!
//! Raw user input flows through four stages before it reaches the view:
//!
//! 1. [`Debouncer`] holds back term edits until typing pauses.
//! 2. [`QueryGate`] rejects incomplete terms without touching the network.
//! 3. [`RequestSequencer`] issues lookups and tags each with a
//!    [`RequestToken`](vitrine_primitives::RequestToken).
//! 4. [`SearchState`] applies the response of the most recently *issued*
//!    request and nothing else.
//!
//! [`SearchOrchestrator`] wires the stages together and is owned by a single
//! event loop. Lookups run as background tasks; their completions come back
//! through a channel and are applied on the owner's turn, so the state needs
//! no lock. Ordering is decided by the token check at the write boundary, not
//! by mutual exclusion.
//!
//! # Modes
//!
//! [`SearchMode::AutoSearchOnType`] searches whenever the debounced term or
//! the filter changes. [`SearchMode::SearchOnSubmit`] only searches on an
//! explicit submit or filter change.

pub mod config;
pub mod debounce;
pub mod gate;
pub mod lookup;
pub mod orchestrator;
pub mod sequencer;
pub mod state;

pub use config::{ConfigError, SearchConfig, SearchMode};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use gate::{DEFAULT_MIN_TERM_LEN, QueryGate};
pub use lookup::{CatalogLookup, FixtureCatalog, LookupError, decode_catalog_payload};
pub use orchestrator::SearchOrchestrator;
pub use sequencer::{LookupCompletion, RequestSequencer};
pub use state::{SearchState, SearchStatus, Transition};
