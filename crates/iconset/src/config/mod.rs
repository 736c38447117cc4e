//! Iconset configuration.
//!
//! The configuration enumerates the placeable types of each category. A
//! section is either a list of type ids, rendered with their bundled icon
//! classes, or a table mapping each type id to an explicit icon source:
//!
//! ```toml
//! actors = ["domainStory:Person", "domainStory:System"]
//!
//! [workObjects]
//! "domainStory:Document" = "icons/document.svg"
//! ```
//!
//! Explicit sources are exposed through [`crate::Iconset::custom_icons`] so
//! the palette can style them.
//!
//! Missing sections are not errors. They produce an empty registry and a
//! [`ConfigWarning`].

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{IconsetError, Result};
use crate::kind::ElementKind;

/// Parsed iconset configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconsetConfig {
	/// Actor types, in palette order.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub actors: Option<TypeSection>,
	/// Work-object types, in palette order.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub work_objects: Option<TypeSection>,
}

/// Type ids of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSection {
	/// Type ids using their bundled icon classes.
	Ids(Vec<String>),
	/// Type ids mapped to explicit icon sources.
	Icons(IndexMap<String, String>),
}

impl TypeSection {
	/// Returns `(type_id, explicit icon)` pairs in declaration order.
	pub fn entries(&self) -> Vec<(&str, Option<&str>)> {
		match self {
			Self::Ids(ids) => ids.iter().map(|id| (id.as_str(), None)).collect(),
			Self::Icons(icons) => icons
				.iter()
				.map(|(id, icon)| (id.as_str(), Some(icon.as_str())))
				.collect(),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Self::Ids(ids) => ids.len(),
			Self::Icons(icons) => icons.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl IconsetConfig {
	/// Builds a configuration from plain type id lists.
	pub fn from_ids<A, W>(actors: A, work_objects: W) -> Self
	where
		A: IntoIterator,
		A::Item: Into<String>,
		W: IntoIterator,
		W::Item: Into<String>,
	{
		Self {
			actors: Some(TypeSection::Ids(actors.into_iter().map(Into::into).collect())),
			work_objects: Some(TypeSection::Ids(
				work_objects.into_iter().map(Into::into).collect(),
			)),
		}
	}

	/// Returns the section for `kind`, if configured.
	pub fn section(&self, kind: ElementKind) -> Option<&TypeSection> {
		match kind {
			ElementKind::Actor => self.actors.as_ref(),
			ElementKind::WorkObject => self.work_objects.as_ref(),
		}
	}

	pub fn from_json_str(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}

	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Reads a configuration file, choosing the format from its extension.
	///
	/// `.toml` files are parsed as TOML; anything else as JSON.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| IconsetError::Io {
			path: path.to_path_buf(),
			error,
		})?;

		let config = match path.extension().and_then(|ext| ext.to_str()) {
			Some("toml") => Self::from_toml_str(&content)?,
			_ => Self::from_json_str(&content)?,
		};
		tracing::debug!(
			path = %path.display(),
			actors = config.actors.as_ref().map_or(0, TypeSection::len),
			work_objects = config.work_objects.as_ref().map_or(0, TypeSection::len),
			"loaded iconset config"
		);
		Ok(config)
	}
}

/// Non-fatal issue found while building registries from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A category section is absent; its registry stays empty.
	MissingSection {
		/// The absent category.
		kind: ElementKind,
	},
	/// A type id was listed more than once; the first occurrence wins.
	DuplicateType {
		/// Category the duplicate was found in.
		kind: ElementKind,
		/// The repeated type id.
		type_id: String,
	},
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingSection { kind } => {
				write!(f, "iconset config has no '{}' section", kind.config_section())
			}
			Self::DuplicateType { kind, type_id } => {
				write!(f, "{kind} type '{type_id}' is listed more than once")
			}
		}
	}
}
