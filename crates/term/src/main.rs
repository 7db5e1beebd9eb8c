mod app;
mod cli;
mod command;
mod logging;
mod render;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use vitrine_search::{FixtureCatalog, SearchOrchestrator};

use crate::app::App;
use crate::cli::Cli;

/// Sample catalog used when `--catalog` is not given.
const SAMPLE_CATALOG: &str = include_str!("../assets/catalog.json");

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	logging::setup_tracing(cli.verbose);

	let config = cli.search_config()?;
	let catalog = match &cli.catalog {
		Some(path) => FixtureCatalog::load(path).with_context(|| format!("loading catalog {}", path.display()))?,
		None => FixtureCatalog::from_json(SAMPLE_CATALOG).context("decoding bundled catalog")?,
	}
	.with_latency(cli.latency());
	info!(entries = catalog.len(), mode = %config.mode, debounce_ms = config.debounce_ms, "vitrine.start");

	let shutdown = CancellationToken::new();
	let on_signal = shutdown.clone();
	tokio::spawn(async move {
		match tokio::signal::ctrl_c().await {
			Ok(()) => on_signal.cancel(),
			Err(err) => warn!(error = %err, "vitrine.signal_unavailable"),
		}
	});

	let search = SearchOrchestrator::new(config, Arc::new(catalog));
	let mut app = App::new(search, std::io::stdout());
	app.run(BufReader::new(tokio::io::stdin()), shutdown).await
}
