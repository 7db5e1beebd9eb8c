//! Core types for catalog search: filters, queries, entries and request tokens.

/// Software catalog entries as returned by the upstream lookup.
pub mod entry;
/// The closed set of catalog filters.
pub mod filter;
/// Immutable search query values.
pub mod query;
/// Request sequencing tokens.
pub mod token;

pub use entry::{IconCategory, SoftwareEntry};
pub use filter::{FilterId, ParseFilterError};
pub use query::SearchQuery;
pub use token::RequestToken;
