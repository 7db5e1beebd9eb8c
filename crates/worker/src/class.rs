/// Execution classes used for task spawning and observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskClass {
	/// Timers and relays feeding the interactive event loop.
	Interactive,
	/// Upstream lookups whose latency is outside our control.
	Network,
}

impl TaskClass {
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::Interactive => "interactive",
			Self::Network => "network",
		}
	}
}
