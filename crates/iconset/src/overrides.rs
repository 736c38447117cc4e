//! User-supplied icon overrides.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping of type id to replacement icon source (a data URI or a path).
///
/// Serialized as a flat JSON object, which is how customization records are
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverridePayload(IndexMap<String, String>);

impl OverridePayload {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a persisted customization record.
	pub fn from_json(input: &str) -> serde_json::Result<Self> {
		serde_json::from_str(input)
	}

	/// Serializes the payload into its persisted form.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	/// Sets the icon source for `type_id`, returning the previous one.
	pub fn insert(
		&mut self,
		type_id: impl Into<String>,
		source: impl Into<String>,
	) -> Option<String> {
		self.0.insert(type_id.into(), source.into())
	}

	pub fn get(&self, type_id: &str) -> Option<&str> {
		self.0.get(type_id).map(String::as_str)
	}

	/// Iterates `(type_id, source)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(id, src)| (id.as_str(), src.as_str()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OverridePayload {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

/// What applying an [`OverridePayload`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideOutcome {
	/// Type ids whose icon was rebound, in payload order.
	pub applied: Vec<String>,
	/// Payload keys that matched no registered type.
	pub ignored: Vec<String>,
}
