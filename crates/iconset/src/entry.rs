use crate::kind::ElementKind;
use crate::naming::{icon_class_for_type, name_from_type};

/// One placeable element type.
///
/// The display name is derived from the type id on construction and never
/// changes. Only the icon reference can be rebound, and only through
/// [`crate::Iconset::override_icons`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
	kind: ElementKind,
	type_id: String,
	display_name: String,
	icon_ref: String,
}

impl TypeEntry {
	/// Creates an entry for `type_id` rendered with `icon_ref`.
	pub fn new(kind: ElementKind, type_id: impl Into<String>, icon_ref: impl Into<String>) -> Self {
		let type_id = type_id.into();
		let display_name = name_from_type(&type_id).to_owned();
		Self {
			kind,
			type_id,
			display_name,
			icon_ref: icon_ref.into(),
		}
	}

	/// Creates an entry whose icon is the bundled CSS class for its type.
	pub fn with_default_icon(kind: ElementKind, type_id: impl Into<String>) -> Self {
		let type_id = type_id.into();
		let icon_ref = icon_class_for_type(&type_id);
		Self::new(kind, type_id, icon_ref)
	}

	pub fn kind(&self) -> ElementKind {
		self.kind
	}

	pub fn type_id(&self) -> &str {
		&self.type_id
	}

	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	/// Visual asset currently bound to this type.
	pub fn icon_ref(&self) -> &str {
		&self.icon_ref
	}

	/// CSS class the palette button uses.
	///
	/// Stable across overrides; injected style rules retarget the class instead.
	pub fn class_name(&self) -> String {
		icon_class_for_type(&self.type_id)
	}

	/// Whether the icon is something other than the bundled class.
	pub fn has_custom_icon(&self) -> bool {
		self.icon_ref != self.class_name()
	}

	pub(crate) fn rebind_icon(&mut self, icon_ref: &str) {
		if self.icon_ref != icon_ref {
			self.icon_ref = icon_ref.to_owned();
		}
	}
}
