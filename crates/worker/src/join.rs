use tokio::task::JoinError;

/// Renders a failed join into a diagnostic message.
///
/// Panic payloads carrying a `&str` or `String` are extracted verbatim;
/// cancellation and opaque payloads get a generic description.
pub fn join_error_message(err: JoinError) -> String {
	if err.is_cancelled() {
		return "task was cancelled".to_string();
	}

	match err.try_into_panic() {
		Ok(payload) => {
			if let Some(msg) = payload.downcast_ref::<&'static str>() {
				format!("task panicked: {msg}")
			} else if let Some(msg) = payload.downcast_ref::<String>() {
				format!("task panicked: {msg}")
			} else {
				"task panicked with a non-string payload".to_string()
			}
		}
		Err(err) => err.to_string(),
	}
}

#[cfg(test)]
mod tests;
