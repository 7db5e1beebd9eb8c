//! Orchestrator configuration.
//!
//! Configuration is written in TOML. Every key is optional:
//!
//! ```toml
//! mode = "search-on-submit"   # or "auto-search-on-type" (default)
//! debounce-ms = 300           # default 500
//! min-term-len = 3            # default 3
//! initial-filter = "free"     # default "all"
//! failure-message = "Search failed, try again."
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_primitives::FilterId;

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::gate::DEFAULT_MIN_TERM_LEN;

/// Message shown to the user when a lookup fails.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Falha ao buscar softwares. Verifique sua chave de API e tente novamente.";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unexpected key or value.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value parsed but is out of range.
	#[error("invalid value for '{key}': {reason}")]
	Invalid {
		/// Offending key.
		key: &'static str,
		/// Why it was rejected.
		reason: String,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// When the orchestrator issues searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
	/// Search whenever the debounced term or the filter changes.
	#[default]
	AutoSearchOnType,
	/// Search only on an explicit submit or a filter change.
	SearchOnSubmit,
}

impl SearchMode {
	/// Returns the identifier used in config files and on the command line.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::AutoSearchOnType => "auto-search-on-type",
			Self::SearchOnSubmit => "search-on-submit",
		}
	}
}

impl fmt::Display for SearchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SearchMode {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.trim() {
			"auto-search-on-type" | "auto" => Ok(Self::AutoSearchOnType),
			"search-on-submit" | "submit" => Ok(Self::SearchOnSubmit),
			other => Err(format!("unknown search mode '{other}' (expected auto-search-on-type or search-on-submit)")),
		}
	}
}

/// Tunables for [`SearchOrchestrator`](crate::SearchOrchestrator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
	/// When searches are issued.
	pub mode: SearchMode,
	/// Quiet period after the last keystroke before the term is searched.
	pub debounce_ms: u64,
	/// Shortest non-empty term that may reach the lookup.
	pub min_term_len: usize,
	/// Fixed user-facing message for failed lookups.
	pub failure_message: String,
	/// Filter selected when the session starts.
	pub initial_filter: FilterId,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			mode: SearchMode::default(),
			debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
			min_term_len: DEFAULT_MIN_TERM_LEN,
			failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
			initial_filter: FilterId::default(),
		}
	}
}

impl SearchConfig {
	/// Parse a TOML string into a validated [`SearchConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Checks value ranges that the TOML schema cannot express.
	pub fn validate(&self) -> Result<()> {
		if self.min_term_len == 0 {
			return Err(ConfigError::Invalid {
				key: "min-term-len",
				reason: "must be at least 1".to_string(),
			});
		}
		if self.failure_message.trim().is_empty() {
			return Err(ConfigError::Invalid {
				key: "failure-message",
				reason: "must not be empty".to_string(),
			});
		}
		Ok(())
	}

	/// Returns the debounce delay.
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}
}
