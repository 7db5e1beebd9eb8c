use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::SoftwareEntry;

/// One of the fixed catalog filters offered next to the search bar.
///
/// The set is closed: the view can only ever select one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterId {
	/// No restriction; a diverse range of results.
	#[default]
	All,
	/// Software that uses or relates to artificial intelligence.
	AiTools,
	/// Business management, productivity and operations software.
	Business,
	/// Software with a free tier or an open source license.
	Free,
	/// Software with a paid subscription or license.
	Paid,
	/// Software created and maintained by Brazilian companies.
	LocalOnly,
}

impl FilterId {
	/// Every filter, in the order the view presents them.
	pub const ALL: [FilterId; 6] = [
		FilterId::All,
		FilterId::AiTools,
		FilterId::Business,
		FilterId::Free,
		FilterId::Paid,
		FilterId::LocalOnly,
	];

	/// Returns the stable identifier used in config files and commands.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::AiTools => "ai-tools",
			Self::Business => "business",
			Self::Free => "free",
			Self::Paid => "paid",
			Self::LocalOnly => "local-only",
		}
	}

	/// Returns the user-facing button label.
	pub const fn label(self) -> &'static str {
		match self {
			Self::All => "Todos",
			Self::AiTools => "Ferramentas de IA",
			Self::Business => "Soluções Empresariais",
			Self::Free => "Gratuitos",
			Self::Paid => "Pagos",
			Self::LocalOnly => "Somente apps brasileiros",
		}
	}

	/// Returns true if `entry` belongs to this filter's slice of the catalog.
	///
	/// Upstream services apply filters themselves; this is used by local
	/// catalogs that have to emulate them.
	pub fn admits(self, entry: &SoftwareEntry) -> bool {
		match self {
			Self::All => true,
			Self::AiTools => entry.icon.is_ai() || entry.has_tag(&["ia", "ai", "inteligência artificial"]),
			Self::Business => entry.icon.is_business(),
			Self::Free => entry.is_free(),
			Self::Paid => entry.is_paid(),
			Self::LocalOnly => entry.brazilian,
		}
	}
}

impl fmt::Display for FilterId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a string names no known filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}' (expected one of: all, ai-tools, business, free, paid, local-only)")]
pub struct ParseFilterError(pub String);

impl FromStr for FilterId {
	type Err = ParseFilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let needle = s.trim();
		Self::ALL
			.into_iter()
			.find(|filter| filter.as_str().eq_ignore_ascii_case(needle))
			.ok_or_else(|| ParseFilterError(needle.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::entry::IconCategory;

	fn entry(icon: IconCategory, price: &str, brazilian: bool) -> SoftwareEntry {
		SoftwareEntry {
			name: "Sample".to_string(),
			description: String::new(),
			tags: vec!["Gestão".to_string()],
			price: price.to_string(),
			icon,
			brazilian,
			website: String::new(),
			rating: 0.0,
		}
	}

	#[rstest]
	#[case("all", FilterId::All)]
	#[case("ai-tools", FilterId::AiTools)]
	#[case("business", FilterId::Business)]
	#[case("free", FilterId::Free)]
	#[case("paid", FilterId::Paid)]
	#[case(" Local-Only ", FilterId::LocalOnly)]
	fn parses_wire_ids(#[case] input: &str, #[case] expected: FilterId) {
		assert_eq!(input.parse::<FilterId>(), Ok(expected));
	}

	#[test]
	fn rejects_unknown_ids() {
		assert_eq!("todos".parse::<FilterId>(), Err(ParseFilterError("todos".to_string())));
	}

	#[test]
	fn display_round_trips_through_from_str() {
		for filter in FilterId::ALL {
			assert_eq!(filter.to_string().parse::<FilterId>(), Ok(filter));
		}
	}

	#[test]
	fn serde_uses_kebab_case_ids() {
		let json = serde_json::to_string(&FilterId::LocalOnly).unwrap();
		assert_eq!(json, "\"local-only\"");
		let parsed: FilterId = serde_json::from_str("\"ai-tools\"").unwrap();
		assert_eq!(parsed, FilterId::AiTools);
	}

	#[test]
	fn admits_follows_entry_attributes() {
		let crm = entry(IconCategory::Crm, "R$ 50/mês", true);
		let bot = entry(IconCategory::Robot, "Gratuito", false);

		assert!(FilterId::All.admits(&crm));
		assert!(FilterId::Business.admits(&crm));
		assert!(FilterId::Paid.admits(&crm));
		assert!(FilterId::LocalOnly.admits(&crm));
		assert!(!FilterId::AiTools.admits(&crm));
		assert!(!FilterId::Free.admits(&crm));

		assert!(FilterId::AiTools.admits(&bot));
		assert!(FilterId::Free.admits(&bot));
		assert!(!FilterId::Paid.admits(&bot));
		assert!(!FilterId::LocalOnly.admits(&bot));
	}
}
