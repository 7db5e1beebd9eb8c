//! CLI schema and config resolution for the vitrine binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use vitrine_primitives::FilterId;
use vitrine_search::{SearchConfig, SearchMode};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Search a software catalog from the terminal")]
#[command(version)]
pub struct Cli {
	/// Config file (defaults to the user config dir when present)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// JSON catalog to search instead of the bundled sample
	#[arg(long, value_name = "PATH")]
	pub catalog: Option<PathBuf>,

	/// When searches run: `auto` while typing or `submit` on demand
	#[arg(long, short = 'm')]
	pub mode: Option<SearchMode>,

	/// Quiet period after the last keystroke before searching
	#[arg(long, value_name = "MS")]
	pub debounce_ms: Option<u64>,

	/// Filter active at startup
	#[arg(long, short = 'f')]
	pub filter: Option<FilterId>,

	/// Simulated lookup latency for the catalog
	#[arg(long, value_name = "MS", default_value_t = 0)]
	pub latency_ms: u64,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

impl Cli {
	/// Resolves the effective search configuration.
	///
	/// An explicit `--config` must exist. Otherwise the user config is read
	/// if there is one. Command-line flags override file values.
	pub fn search_config(&self) -> anyhow::Result<SearchConfig> {
		let mut config = match (&self.config, default_config_path()) {
			(Some(path), _) => load(path)?,
			(None, Some(path)) if path.is_file() => load(&path)?,
			_ => SearchConfig::default(),
		};

		if let Some(mode) = self.mode {
			config.mode = mode;
		}
		if let Some(ms) = self.debounce_ms {
			config.debounce_ms = ms;
		}
		if let Some(filter) = self.filter {
			config.initial_filter = filter;
		}
		config.validate().context("invalid search configuration")?;
		Ok(config)
	}

	/// Returns the simulated catalog latency.
	pub fn latency(&self) -> Duration {
		Duration::from_millis(self.latency_ms)
	}
}

fn load(path: &Path) -> anyhow::Result<SearchConfig> {
	SearchConfig::load(path).with_context(|| format!("loading config from {}", path.display()))
}

/// Returns `<config dir>/vitrine/config.toml` for the current platform.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("vitrine").join("config.toml"))
}
