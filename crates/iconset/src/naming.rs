//! Naming rules shared by registries, style rules and palette entries.

/// Namespace of every built-in domain-story element type.
pub const NAMESPACE: &str = "domainStory";

/// Type id of the group element created by the palette's group tool.
pub const GROUP_TYPE: &str = "domainStory:group";

/// Prefix of every icon CSS class.
pub const ICON_CLASS_PREFIX: &str = "icon-domain-story-";

/// Returns the local part of a namespaced type id.
///
/// `domainStory:Actor1` becomes `Actor1`. Ids without a namespace are
/// returned unchanged.
pub fn name_from_type(type_id: &str) -> &str {
	type_id.split_once(':').map_or(type_id, |(_, local)| local)
}

/// Returns the CSS class that renders the icon of `type_id`.
pub fn icon_class_for_type(type_id: &str) -> String {
	format!("{ICON_CLASS_PREFIX}{}", name_from_type(type_id).to_lowercase())
}
