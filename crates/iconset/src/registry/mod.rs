//! Ordered type registry for one element category.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::config::{ConfigWarning, IconsetConfig};
use crate::entry::TypeEntry;
use crate::kind::ElementKind;

/// Ordered mapping of type id to [`TypeEntry`] for one [`ElementKind`].
///
/// Iteration order is registration order. Entries are added only while
/// initializing from configuration and are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
	kind: ElementKind,
	entries: IndexMap<String, TypeEntry>,
}

impl TypeRegistry {
	/// Creates an empty registry.
	pub fn new(kind: ElementKind) -> Self {
		Self {
			kind,
			entries: IndexMap::new(),
		}
	}

	/// Populates a registry from the configuration section for `kind`.
	///
	/// An absent section yields an empty registry. Warnings for the absent
	/// section and for repeated type ids are returned alongside.
	pub fn initialize(kind: ElementKind, config: &IconsetConfig) -> (Self, Vec<ConfigWarning>) {
		let mut registry = Self::new(kind);
		let mut warnings = Vec::new();

		let Some(section) = config.section(kind) else {
			tracing::warn!(section = kind.config_section(), "iconset section missing");
			warnings.push(ConfigWarning::MissingSection { kind });
			return (registry, warnings);
		};

		for (type_id, icon) in section.entries() {
			let entry = match icon {
				Some(icon) => TypeEntry::new(kind, type_id, icon),
				None => TypeEntry::with_default_icon(kind, type_id),
			};
			if !registry.register(entry) {
				tracing::warn!(%kind, type_id, "duplicate type id in iconset config");
				warnings.push(ConfigWarning::DuplicateType {
					kind,
					type_id: type_id.to_owned(),
				});
			}
		}

		(registry, warnings)
	}

	/// Appends `entry`, returning `false` if its type id is already registered.
	fn register(&mut self, entry: TypeEntry) -> bool {
		match self.entries.entry(entry.type_id().to_owned()) {
			Entry::Occupied(_) => false,
			Entry::Vacant(slot) => {
				slot.insert(entry);
				true
			}
		}
	}

	/// Rebinds the icon of an existing type. Unknown type ids are left alone.
	///
	/// Returns `true` if `type_id` is registered here.
	pub fn rebind_icon(&mut self, type_id: &str, icon_ref: &str) -> bool {
		let Some(entry) = self.entries.get_mut(type_id) else {
			return false;
		};
		entry.rebind_icon(icon_ref);
		true
	}

	pub fn kind(&self) -> ElementKind {
		self.kind
	}

	pub fn get(&self, type_id: &str) -> Option<&TypeEntry> {
		self.entries.get(type_id)
	}

	pub fn contains(&self, type_id: &str) -> bool {
		self.entries.contains_key(type_id)
	}

	/// Entries in registration order.
	pub fn entries(&self) -> impl ExactSizeIterator<Item = &TypeEntry> {
		self.entries.values()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests;
