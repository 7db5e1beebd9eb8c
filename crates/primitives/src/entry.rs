use serde::{Deserialize, Serialize};

/// Highest rating an entry can carry.
pub const MAX_RATING: f64 = 5.0;

/// A single software record in a search result.
///
/// Field names on the wire follow the upstream response schema
/// (`iconClass`, `brazilian`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareEntry {
	/// Official name of the software.
	pub name: String,
	/// One-sentence description.
	#[serde(default)]
	pub description: String,
	/// Relevant keywords, most relevant first.
	#[serde(default)]
	pub tags: Vec<String>,
	/// Pricing label, e.g. `Gratuito + R$ 29/mês`.
	#[serde(default)]
	pub price: String,
	/// Icon category used by the view to pick a glyph.
	#[serde(rename = "iconClass", default)]
	pub icon: IconCategory,
	/// Whether the software originates from Brazil.
	#[serde(default)]
	pub brazilian: bool,
	/// Official homepage URL.
	#[serde(default)]
	pub website: String,
	/// Average user rating out of 5; 0 when unknown.
	#[serde(default)]
	pub rating: f64,
}

impl SoftwareEntry {
	/// Returns the rating clamped to `0..=5`, mapping NaN to 0.
	pub fn rating(&self) -> f64 {
		if self.rating.is_nan() { 0.0 } else { self.rating.clamp(0.0, MAX_RATING) }
	}

	/// Returns true if any tag equals one of `needles`, ignoring case.
	pub fn has_tag(&self, needles: &[&str]) -> bool {
		self.tags.iter().any(|tag| {
			let tag = tag.to_lowercase();
			needles.iter().any(|needle| tag == *needle)
		})
	}

	/// Returns true if the price label advertises a free tier or open source license.
	pub fn is_free(&self) -> bool {
		let price = self.price.to_lowercase();
		["gratuito", "grátis", "free", "open source"].iter().any(|m| price.contains(m))
	}

	/// Returns true if the price label mentions a paid plan.
	///
	/// Freemium labels like `Gratuito + R$ 10/mês` count as both free and paid.
	pub fn is_paid(&self) -> bool {
		let price = self.price.to_lowercase();
		["r$", "us$", "pago", "paid", "sob consulta", "/mês"].iter().any(|m| price.contains(m))
	}

	/// Returns true if `needle` (already lowercased) occurs in the name,
	/// description or any tag.
	pub fn mentions(&self, needle: &str) -> bool {
		self.name.to_lowercase().contains(needle)
			|| self.description.to_lowercase().contains(needle)
			|| self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
	}
}

/// Icon category attached to an entry.
///
/// Unknown names from upstream collapse to [`IconCategory::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum IconCategory {
	Erp,
	Retail,
	Hr,
	Support,
	Marketing,
	Payment,
	Finance,
	Communication,
	Office,
	Crm,
	Design,
	Collaboration,
	Project,
	Video,
	Ai,
	Brain,
	Robot,
	#[default]
	Generic,
}

impl IconCategory {
	/// Every category, in upstream enumeration order.
	pub const ALL: [IconCategory; 18] = [
		Self::Erp,
		Self::Retail,
		Self::Hr,
		Self::Support,
		Self::Marketing,
		Self::Payment,
		Self::Finance,
		Self::Communication,
		Self::Office,
		Self::Crm,
		Self::Design,
		Self::Collaboration,
		Self::Project,
		Self::Video,
		Self::Ai,
		Self::Brain,
		Self::Robot,
		Self::Generic,
	];

	/// Returns the upstream name of this category.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Erp => "erp",
			Self::Retail => "retail",
			Self::Hr => "hr",
			Self::Support => "support",
			Self::Marketing => "marketing",
			Self::Payment => "payment",
			Self::Finance => "finance",
			Self::Communication => "communication",
			Self::Office => "office",
			Self::Crm => "crm",
			Self::Design => "design",
			Self::Collaboration => "collaboration",
			Self::Project => "project",
			Self::Video => "video",
			Self::Ai => "ai",
			Self::Brain => "brain",
			Self::Robot => "robot",
			Self::Generic => "default",
		}
	}

	/// Returns true for the AI-flavoured categories.
	pub const fn is_ai(self) -> bool {
		matches!(self, Self::Ai | Self::Brain | Self::Robot)
	}

	/// Returns true for categories describing business operations.
	pub const fn is_business(self) -> bool {
		matches!(
			self,
			Self::Erp
				| Self::Retail
				| Self::Hr
				| Self::Support
				| Self::Marketing
				| Self::Payment
				| Self::Finance
				| Self::Crm
				| Self::Project
				| Self::Office
				| Self::Collaboration
		)
	}
}

impl From<String> for IconCategory {
	fn from(name: String) -> Self {
		let name = name.trim();
		Self::ALL
			.into_iter()
			.find(|icon| icon.as_str().eq_ignore_ascii_case(name))
			.unwrap_or_default()
	}
}

impl From<IconCategory> for &'static str {
	fn from(icon: IconCategory) -> Self {
		icon.as_str()
	}
}
