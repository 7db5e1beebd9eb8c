//! Input line parsing.
//!
//! Plain lines are term edits. Lines starting with `:` are commands; a
//! leading `::` escapes a literal colon.

use thiserror::Error;
use vitrine_primitives::{FilterId, ParseFilterError};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Replace the search term.
	Edit(String),
	/// Select a filter.
	Filter(FilterId),
	/// Print the available filters.
	ListFilters,
	/// Search the current term now.
	Submit,
	/// Print usage.
	Help,
	/// Leave the session.
	Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
	#[error("unknown command ':{0}' (try :help)")]
	Unknown(String),
	#[error(":filter needs a filter id (try :filters)")]
	MissingFilter,
	#[error(transparent)]
	Filter(#[from] ParseFilterError),
}

pub const HELP: &str = "\
<texto>            search term (auto mode searches after a pause)
:submit, :s        search the current term now
:filter <id>, :f   select a filter
:filters           list filters
:help, :h          show this help
:quit, :q          exit
::texto            search term starting with ':'";

impl Command {
	pub fn parse(line: &str) -> Result<Self, CommandError> {
		let Some(rest) = line.strip_prefix(':') else {
			return Ok(Self::Edit(line.to_string()));
		};
		if rest.starts_with(':') {
			return Ok(Self::Edit(rest.to_string()));
		}

		let (name, arg) = match rest.trim().split_once(char::is_whitespace) {
			Some((name, arg)) => (name, arg.trim()),
			None => (rest.trim(), ""),
		};
		match name {
			"q" | "quit" => Ok(Self::Quit),
			"s" | "submit" => Ok(Self::Submit),
			"h" | "help" => Ok(Self::Help),
			"filters" => Ok(Self::ListFilters),
			"f" | "filter" if arg.is_empty() => Err(CommandError::MissingFilter),
			"f" | "filter" => Ok(Self::Filter(arg.parse()?)),
			other => Err(CommandError::Unknown(other.to_string())),
		}
	}
}
