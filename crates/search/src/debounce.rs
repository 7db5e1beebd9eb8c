//! Cancellable debounce timer.
//!
//! [`Debouncer::push`] replaces the scheduled emission with a new one; the
//! value surfaces through [`Debouncer::settled`] only after it has stayed
//! unchanged for the whole delay. Each schedule runs as a timer task holding a
//! [`GenerationToken`]. Superseding a value cancels the old token, and the
//! receive side compares generations as well, so an emission that raced its
//! own cancellation into the channel is still dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;
use vitrine_worker::{GenerationClock, GenerationToken, TaskClass, spawn};

/// Default quiet period before a term edit is propagated.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct Settled<T> {
	generation: u64,
	value: T,
}

/// Delays propagation of a changing value until it is stable.
pub struct Debouncer<T> {
	delay: Duration,
	clock: GenerationClock,
	latest: T,
	pending: Option<GenerationToken>,
	settled_tx: mpsc::UnboundedSender<Settled<T>>,
	settled_rx: mpsc::UnboundedReceiver<Settled<T>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Debouncer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Debouncer")
			.field("delay", &self.delay)
			.field("latest", &self.latest)
			.field("pending", &self.pending.as_ref().map(GenerationToken::generation))
			.finish()
	}
}

impl<T> Debouncer<T>
where
	T: Clone + PartialEq + Send + 'static,
{
	/// Creates a debouncer whose current value is `initial`.
	///
	/// The initial value is considered already settled and is never emitted.
	pub fn new(delay: Duration, initial: T) -> Self {
		let (settled_tx, settled_rx) = mpsc::unbounded_channel();
		Self {
			delay,
			clock: GenerationClock::new(),
			latest: initial,
			pending: None,
			settled_tx,
			settled_rx,
		}
	}

	/// Returns the most recent input, settled or not.
	pub fn latest(&self) -> &T {
		&self.latest
	}

	/// Returns true while an emission is scheduled.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Records a new input and schedules its emission after the delay.
	///
	/// An input equal to the latest one is not a change: any scheduled
	/// emission keeps its original deadline. Returns true if a new emission
	/// was scheduled.
	///
	/// Must be called from within a Tokio runtime context.
	pub fn push(&mut self, value: T) -> bool {
		if value == self.latest {
			return false;
		}
		self.cancel();

		let token = GenerationToken::fresh(self.clock.next());
		let generation = token.generation();
		self.pending = Some(token.clone());
		self.latest = value.clone();

		let delay = self.delay;
		let tx = self.settled_tx.clone();
		trace!(generation, delay_ms = delay.as_millis() as u64, "debounce.schedule");
		spawn(TaskClass::Interactive, async move {
			tokio::select! {
				_ = token.cancelled() => {}
				_ = tokio::time::sleep(delay) => {
					let _ = tx.send(Settled { generation, value });
				}
			}
		});
		true
	}

	/// Records `value` as the latest input without scheduling an emission.
	///
	/// Any scheduled emission is cancelled.
	pub fn replace(&mut self, value: T) {
		self.cancel();
		self.latest = value;
	}

	/// Cancels the scheduled emission, if any. The latest value is kept.
	pub fn cancel(&mut self) {
		if let Some(token) = self.pending.take() {
			trace!(generation = token.generation(), "debounce.cancel");
			token.cancel();
		}
	}

	/// Cancels the scheduled emission and returns the latest value right away.
	pub fn flush(&mut self) -> T {
		self.cancel();
		self.latest.clone()
	}

	/// Returns a settled value that is already waiting, without blocking.
	pub fn try_settled(&mut self) -> Option<T> {
		while let Ok(settled) = self.settled_rx.try_recv() {
			if let Some(value) = self.accept(settled) {
				return Some(value);
			}
		}
		None
	}

	/// Waits for the next settled value.
	///
	/// Cancel-safe: dropping the future loses no emission. Pends forever when
	/// nothing is scheduled.
	pub async fn settled(&mut self) -> T {
		loop {
			// The debouncer owns a sender, so the channel never closes.
			let Some(settled) = self.settled_rx.recv().await else {
				std::future::pending::<()>().await;
				continue;
			};
			if let Some(value) = self.accept(settled) {
				return value;
			}
		}
	}

	fn accept(&mut self, settled: Settled<T>) -> Option<T> {
		match &self.pending {
			Some(token) if token.generation() == settled.generation => {
				self.pending = None;
				trace!(generation = settled.generation, "debounce.emit");
				Some(settled.value)
			}
			_ => {
				trace!(generation = settled.generation, "debounce.stale");
				None
			}
		}
	}
}

impl<T> Drop for Debouncer<T> {
	fn drop(&mut self) {
		if let Some(token) = self.pending.take() {
			token.cancel();
		}
	}
}

#[cfg(test)]
mod tests;
