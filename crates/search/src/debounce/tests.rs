use std::time::Duration;

use tokio::time::{Instant, sleep, timeout};

use super::*;

const DELAY: Duration = Duration::from_millis(500);

#[tokio::test(start_paused = true)]
async fn emits_once_after_value_stabilizes() {
	let start = Instant::now();
	let mut debouncer = Debouncer::new(DELAY, String::new());

	assert!(debouncer.push("c".to_string()));
	sleep(Duration::from_millis(100)).await;
	assert!(debouncer.push("cr".to_string()));
	sleep(Duration::from_millis(100)).await;
	assert!(debouncer.push("crm".to_string()));
	sleep(Duration::from_millis(350)).await;
	// Re-submitting the current value at t=550 is not a change.
	assert!(!debouncer.push("crm".to_string()));

	let value = debouncer.settled().await;
	assert_eq!(value, "crm");
	let elapsed = start.elapsed();
	assert!(
		elapsed >= Duration::from_millis(700) && elapsed < Duration::from_millis(705),
		"emitted after {elapsed:?}"
	);
	assert!(!debouncer.is_pending());

	assert!(
		timeout(Duration::from_secs(10), debouncer.settled()).await.is_err(),
		"no second emission expected"
	);
}

#[tokio::test(start_paused = true)]
async fn superseded_values_never_surface() {
	let mut debouncer = Debouncer::new(DELAY, String::new());
	debouncer.push("foo".to_string());
	sleep(Duration::from_millis(499)).await;
	debouncer.push("foobar".to_string());

	// The first timer would have fired here; it was cancelled.
	sleep(Duration::from_millis(10)).await;
	assert_eq!(debouncer.try_settled(), None);

	assert_eq!(debouncer.settled().await, "foobar");
}

#[tokio::test(start_paused = true)]
async fn initial_value_is_not_emitted() {
	let mut debouncer = Debouncer::new(DELAY, String::from("crm"));
	assert!(!debouncer.push("crm".to_string()));
	assert!(!debouncer.is_pending());
	assert!(timeout(Duration::from_secs(2), debouncer.settled()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn flush_cancels_pending_emission() {
	let mut debouncer = Debouncer::new(DELAY, String::new());
	debouncer.push("omie".to_string());
	assert!(debouncer.is_pending());

	assert_eq!(debouncer.flush(), "omie");
	assert!(!debouncer.is_pending());

	sleep(Duration::from_secs(1)).await;
	assert_eq!(debouncer.try_settled(), None);
}

#[tokio::test(start_paused = true)]
async fn returning_to_previous_value_still_reschedules() {
	let mut debouncer = Debouncer::new(DELAY, String::new());
	debouncer.push("abc".to_string());
	sleep(Duration::from_millis(100)).await;
	debouncer.push("abcd".to_string());
	sleep(Duration::from_millis(100)).await;
	assert!(debouncer.push("abc".to_string()));

	assert_eq!(debouncer.settled().await, "abc");
}

#[tokio::test(start_paused = true)]
async fn emission_racing_cancellation_is_dropped() {
	let mut debouncer = Debouncer::new(DELAY, 0u32);
	debouncer.push(1);
	sleep(DELAY + Duration::from_millis(1)).await;
	// The timer already sent generation 1; a newer push supersedes it before
	// the owner drained the channel.
	debouncer.push(2);
	assert_eq!(debouncer.try_settled(), None);
	assert_eq!(debouncer.settled().await, 2);
}
