//! Worker primitives shared by the search runtime.
//!
//! Everything the orchestrator runs in the background goes through
//! [`spawn`], tagged with a [`TaskClass`] so traces can tell debounce timers
//! apart from upstream lookups. [`GenerationClock`] hands out the monotonic
//! identifiers used to recognise superseded work.

mod class;
mod join;
mod spawn;
mod token;

pub use class::TaskClass;
pub use join::join_error_message;
pub use spawn::spawn;
pub use token::{GenerationClock, GenerationToken};
