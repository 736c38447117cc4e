use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a placeable domain-story element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
	/// People, groups and systems that act in a story.
	Actor,
	/// Things actors work with: documents, messages, systems.
	WorkObject,
}

impl ElementKind {
	/// Every kind, in palette order.
	pub const ALL: [Self; 2] = [Self::Actor, Self::WorkObject];

	/// Name of the configuration section listing types of this kind.
	pub const fn config_section(self) -> &'static str {
		match self {
			Self::Actor => "actors",
			Self::WorkObject => "workObjects",
		}
	}
}

impl fmt::Display for ElementKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Actor => f.write_str("actor"),
			Self::WorkObject => f.write_str("work object"),
		}
	}
}
