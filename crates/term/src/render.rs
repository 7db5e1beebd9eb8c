//! Plain-text rendering of the search view.

use std::fmt::Write as _;

use vitrine_primitives::{FilterId, SearchQuery, SoftwareEntry};
use vitrine_search::{SearchOrchestrator, SearchState, SearchStatus};

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯪';
const EMPTY_STAR: char = '☆';
const TOTAL_STARS: u8 = 5;
const MAX_TAGS: usize = 3;

/// Everything the view needs from one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
	pub state: &'a SearchState,
	pub filter: FilterId,
	pub min_term_len: usize,
}

impl<'a> Frame<'a> {
	pub fn of(search: &'a SearchOrchestrator) -> Self {
		Self {
			state: search.state(),
			filter: search.filter(),
			min_term_len: search.config().min_term_len,
		}
	}
}

pub fn render(frame: Frame<'_>) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "{}", filter_bar(frame.filter));

	let state = frame.state;
	if let Some(message) = state.error_message() {
		let _ = writeln!(out, "Ocorreu um erro");
		let _ = writeln!(out, "{message}");
		return out;
	}
	if state.status() == SearchStatus::Pending {
		let _ = writeln!(out, "Buscando...");
		return out;
	}

	let results = state.results();
	let _ = writeln!(out, "{} resultado(s)", results.len());
	if results.is_empty() {
		let len = state.query().map_or(0, SearchQuery::term_len);
		if len > 0 && len < frame.min_term_len {
			let _ = writeln!(
				out,
				"Continue digitando para iniciar a busca (mínimo {} caracteres).",
				frame.min_term_len
			);
		} else {
			let _ = writeln!(out, "Nenhum software encontrado com os filtros selecionados.");
		}
		return out;
	}

	for (index, entry) in results.iter().enumerate() {
		out.push('\n');
		render_entry(&mut out, index + 1, entry);
	}
	out
}

/// Renders the filter row with the active filter bracketed.
pub fn filter_bar(active: FilterId) -> String {
	FilterId::ALL
		.iter()
		.map(|&filter| {
			if filter == active {
				format!("[{}]", filter.label())
			} else {
				filter.label().to_string()
			}
		})
		.collect::<Vec<_>>()
		.join(" · ")
}

/// Lists filters with their ids, marking the active one.
pub fn filter_list(active: FilterId) -> String {
	let mut out = String::new();
	for filter in FilterId::ALL {
		let marker = if filter == active { '*' } else { ' ' };
		let _ = writeln!(out, "{marker} {:<11} {}", filter.as_str(), filter.label());
	}
	out
}

fn render_entry(out: &mut String, position: usize, entry: &SoftwareEntry) {
	let origin = if entry.brazilian { " [BR]" } else { "" };
	let _ = writeln!(out, "{position}. {} ({}){origin}", entry.name, entry.icon.as_str());
	if !entry.description.is_empty() {
		let _ = writeln!(out, "   {}", entry.description);
	}
	let rating = entry.rating();
	if rating > 0.0 {
		let _ = writeln!(out, "   {} {rating:.1}", stars(rating));
	}
	if !entry.tags.is_empty() {
		let tags: Vec<&str> = entry.tags.iter().take(MAX_TAGS).map(String::as_str).collect();
		let _ = writeln!(out, "   {}", tags.join(" · "));
	}
	if !entry.price.is_empty() {
		let _ = writeln!(out, "   {}", entry.price);
	}
	if !entry.website.is_empty() {
		let _ = writeln!(out, "   {}", entry.website);
	}
}

/// Five stars: full up to the rating, one half star for a remainder of at
/// least .5, empty after.
pub fn stars(rating: f64) -> String {
	(1..=TOTAL_STARS)
		.map(|i| {
			let i = f64::from(i);
			if i <= rating {
				FULL_STAR
			} else if i - 0.5 <= rating {
				HALF_STAR
			} else {
				EMPTY_STAR
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use vitrine_primitives::IconCategory;
	use vitrine_search::Transition;

	use super::*;

	fn entry(name: &str, rating: f64) -> SoftwareEntry {
		SoftwareEntry {
			name: name.to_string(),
			description: "ERP online.".to_string(),
			tags: ["ERP", "Gestão", "Financeiro", "Fiscal"].map(String::from).to_vec(),
			price: "R$ 150/mês".to_string(),
			icon: IconCategory::Erp,
			brazilian: true,
			website: "https://www.omie.com.br".to_string(),
			rating,
		}
	}

	fn frame(state: &SearchState) -> Frame<'_> {
		Frame {
			state,
			filter: FilterId::All,
			min_term_len: 3,
		}
	}

	fn issued(term: &str) -> SearchState {
		let mut state = SearchState::default();
		state.apply(Transition::Issued {
			query: SearchQuery::new(term, FilterId::All),
		});
		state
	}

	#[rstest]
	#[case(5.0, "★★★★★")]
	#[case(4.6, "★★★★⯪")]
	#[case(4.4, "★★★★☆")]
	#[case(3.5, "★★★⯪☆")]
	#[case(0.5, "⯪☆☆☆☆")]
	#[case(0.0, "☆☆☆☆☆")]
	fn renders_stars(#[case] rating: f64, #[case] expected: &str) {
		assert_eq!(stars(rating), expected);
	}

	#[test]
	fn pending_shows_progress_only() {
		let state = issued("crm");
		let text = render(frame(&state));
		assert!(text.ends_with("Buscando...\n"), "got {text}");
	}

	#[test]
	fn renders_entries() {
		let mut state = issued("omie");
		state.apply(Transition::Succeeded {
			results: vec![entry("Omie", 4.6), entry("Bling", 0.0)],
		});
		let text = render(frame(&state));
		assert_eq!(
			text,
			"[Todos] · Ferramentas de IA · Soluções Empresariais · Gratuitos · Pagos · Somente apps brasileiros\n\
			 2 resultado(s)\n\
			 \n\
			 1. Omie (erp) [BR]\n   ERP online.\n   ★★★★⯪ 4.6\n   ERP · Gestão · Financeiro\n   R$ 150/mês\n   https://www.omie.com.br\n\
			 \n\
			 2. Bling (erp) [BR]\n   ERP online.\n   ERP · Gestão · Financeiro\n   R$ 150/mês\n   https://www.omie.com.br\n"
		);
	}

	#[test]
	fn short_term_hints_minimum_length() {
		let mut state = SearchState::default();
		state.apply(Transition::Rejected {
			query: SearchQuery::new("ab", FilterId::All),
		});
		let text = render(frame(&state));
		assert!(text.contains("mínimo 3 caracteres"), "got {text}");
	}

	#[test]
	fn broad_idle_state_says_nothing_found() {
		let state = SearchState::default();
		let text = render(frame(&state));
		assert!(text.contains("Nenhum software encontrado"), "got {text}");
		assert!(!text.contains("mínimo"));
	}

	#[test]
	fn empty_result_says_nothing_found() {
		let mut state = issued("xyzzy");
		state.apply(Transition::Succeeded { results: Vec::new() });
		let text = render(frame(&state));
		assert!(text.contains("0 resultado(s)"));
		assert!(text.contains("Nenhum software encontrado"));
	}

	#[test]
	fn failure_shows_message() {
		let mut state = issued("erp");
		state.apply(Transition::Failed {
			message: "Falha ao buscar softwares.".to_string(),
		});
		let text = render(frame(&state));
		assert!(text.contains("Ocorreu um erro\nFalha ao buscar softwares.\n"), "got {text}");
	}

	#[test]
	fn filter_list_marks_active() {
		let list = filter_list(FilterId::Free);
		assert!(list.contains("* free        Gratuitos"), "got {list}");
		assert!(list.contains("  paid        Pagos"));
	}
}
