//! The pair of registries owned by one editing session.

use crate::config::{ConfigWarning, IconsetConfig};
use crate::entry::TypeEntry;
use crate::kind::ElementKind;
use crate::overrides::{OverrideOutcome, OverridePayload};
use crate::registry::TypeRegistry;

/// Actor and work-object registries, keyed together by `(kind, type_id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iconset {
	actors: TypeRegistry,
	work_objects: TypeRegistry,
	warnings: Vec<ConfigWarning>,
}

impl Default for Iconset {
	fn default() -> Self {
		Self {
			actors: TypeRegistry::new(ElementKind::Actor),
			work_objects: TypeRegistry::new(ElementKind::WorkObject),
			warnings: Vec::new(),
		}
	}
}

impl Iconset {
	/// Builds both registries from `config`.
	pub fn from_config(config: &IconsetConfig) -> Self {
		let (actors, mut warnings) = TypeRegistry::initialize(ElementKind::Actor, config);
		let (work_objects, work_object_warnings) =
			TypeRegistry::initialize(ElementKind::WorkObject, config);
		warnings.extend(work_object_warnings);

		tracing::debug!(
			actors = actors.len(),
			work_objects = work_objects.len(),
			"iconset initialized"
		);

		Self {
			actors,
			work_objects,
			warnings,
		}
	}

	pub fn actors(&self) -> &TypeRegistry {
		&self.actors
	}

	pub fn work_objects(&self) -> &TypeRegistry {
		&self.work_objects
	}

	pub fn registry(&self, kind: ElementKind) -> &TypeRegistry {
		match kind {
			ElementKind::Actor => &self.actors,
			ElementKind::WorkObject => &self.work_objects,
		}
	}

	/// Looks up `type_id` in either registry, actors first.
	pub fn get(&self, type_id: &str) -> Option<&TypeEntry> {
		self.actors.get(type_id).or_else(|| self.work_objects.get(type_id))
	}

	/// All entries, actors first, each block in registration order.
	pub fn entries(&self) -> impl Iterator<Item = &TypeEntry> {
		self.actors.entries().chain(self.work_objects.entries())
	}

	/// Non-fatal issues found while reading the configuration.
	pub fn warnings(&self) -> &[ConfigWarning] {
		&self.warnings
	}

	/// Types bound to an icon source other than their bundled class.
	///
	/// Non-empty when the configuration names explicit icons, or after
	/// [`Iconset::override_icons`] rebinds some.
	pub fn custom_icons(&self) -> OverridePayload {
		self.entries()
			.filter(|entry| entry.has_custom_icon())
			.map(|entry| (entry.type_id(), entry.icon_ref()))
			.collect()
	}

	/// Rebinds icons for every payload key that names a registered type.
	///
	/// Keys naming no registered type are reported as ignored; overrides never
	/// introduce new placeable types. Applying the same payload again leaves
	/// the iconset unchanged.
	pub fn override_icons(&mut self, payload: &OverridePayload) -> OverrideOutcome {
		let mut outcome = OverrideOutcome::default();

		for (type_id, source) in payload.iter() {
			let bound = self.actors.rebind_icon(type_id, source)
				|| self.work_objects.rebind_icon(type_id, source);
			if bound {
				outcome.applied.push(type_id.to_owned());
			} else {
				tracing::warn!(type_id, "icon override names no registered type");
				outcome.ignored.push(type_id.to_owned());
			}
		}

		tracing::debug!(
			applied = outcome.applied.len(),
			ignored = outcome.ignored.len(),
			"icon overrides applied"
		);
		outcome
	}
}
