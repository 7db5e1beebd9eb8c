use serde_json::Value;
use tracing::warn;
use vitrine_primitives::SoftwareEntry;

use super::LookupError;

/// Decodes an upstream JSON response body into catalog entries.
///
/// Text that is not JSON, or list items that do not fit the entry schema, are
/// errors. Well-formed JSON that is not a list is treated as an empty result
/// and logged, so the user sees "0 results" rather than an error banner.
pub fn decode_catalog_payload(text: &str) -> Result<Vec<SoftwareEntry>, LookupError> {
	let value: Value = serde_json::from_str(text.trim())?;
	let Value::Array(items) = value else {
		warn!(kind = value_kind(&value), "lookup.payload_not_list");
		return Ok(Vec::new());
	};

	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| serde_json::from_value(item).map_err(|source| LookupError::Schema { index, source }))
		.collect()
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
