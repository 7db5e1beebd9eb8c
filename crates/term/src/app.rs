//! Session loop: stdin lines in, rendered frames out.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use vitrine_search::{SearchMode, SearchOrchestrator};

use crate::command::{Command, HELP};
use crate::render::{Frame, filter_list, render};

enum LoopEvent {
	Shutdown,
	Input(Option<String>),
	Background(bool),
}

/// One interactive search session.
pub struct App<W> {
	search: SearchOrchestrator,
	out: W,
	rendered: Option<u64>,
}

impl<W: Write> App<W> {
	pub fn new(search: SearchOrchestrator, out: W) -> Self {
		Self {
			search,
			out,
			rendered: None,
		}
	}

	#[cfg(test)]
	pub fn into_output(self) -> W {
		self.out
	}

	/// Runs until `:quit`, end of input or `shutdown`.
	///
	/// At end of input outstanding work is settled first so piped sessions
	/// print their final results.
	pub async fn run<R>(&mut self, input: R, shutdown: CancellationToken) -> anyhow::Result<()>
	where
		R: AsyncBufRead + Unpin,
	{
		let mut lines = input.lines();
		self.search.start();
		if self.search.config().mode == SearchMode::SearchOnSubmit {
			writeln!(self.out, "Modo busca ao enviar: digite o termo e use :submit")?;
		}
		self.render()?;

		loop {
			let event = tokio::select! {
				() = shutdown.cancelled() => LoopEvent::Shutdown,
				line = lines.next_line() => LoopEvent::Input(line.context("reading input")?),
				changed = self.search.tick() => LoopEvent::Background(changed),
			};

			match event {
				LoopEvent::Shutdown => {
					info!("session.shutdown");
					break;
				}
				LoopEvent::Input(None) => {
					debug!("session.eof");
					tokio::select! {
						() = shutdown.cancelled() => {}
						() = self.search.settle() => {}
					}
					self.render()?;
					break;
				}
				LoopEvent::Input(Some(line)) => match Command::parse(&line) {
					Ok(Command::Quit) => break,
					Ok(command) => self.dispatch(command)?,
					Err(err) => writeln!(self.out, "{err}")?,
				},
				LoopEvent::Background(true) => self.render()?,
				LoopEvent::Background(false) => {}
			}
		}
		self.out.flush()?;
		Ok(())
	}

	fn dispatch(&mut self, command: Command) -> anyhow::Result<()> {
		match command {
			Command::Edit(term) => self.search.term_changed(term),
			Command::Filter(filter) => {
				if self.search.filter_changed(filter) {
					self.render()?;
				}
			}
			Command::Submit => {
				if self.search.submit() {
					self.render()?;
				}
			}
			Command::ListFilters => write!(self.out, "{}", filter_list(self.search.filter()))?,
			Command::Help => writeln!(self.out, "{HELP}")?,
			Command::Quit => {}
		}
		Ok(())
	}

	/// Writes a frame unless this revision was already shown.
	fn render(&mut self) -> anyhow::Result<()> {
		let revision = self.search.state().revision();
		if self.rendered == Some(revision) {
			return Ok(());
		}
		self.rendered = Some(revision);
		writeln!(self.out, "{}", render(Frame::of(&self.search)))?;
		self.out.flush()?;
		Ok(())
	}
}
