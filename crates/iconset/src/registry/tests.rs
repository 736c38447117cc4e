use pretty_assertions::assert_eq;

use super::*;
use crate::{Iconset, OverridePayload, TypeSection};

fn config() -> IconsetConfig {
	IconsetConfig::from_ids(
		["domainStory:Person", "domainStory:Group", "domainStory:System"],
		["domainStory:Document", "domainStory:Email"],
	)
}

fn type_ids(registry: &TypeRegistry) -> Vec<&str> {
	registry.entries().map(TypeEntry::type_id).collect()
}

#[test]
fn initialize_keeps_registration_order() {
	let (actors, warnings) = TypeRegistry::initialize(ElementKind::Actor, &config());

	assert!(warnings.is_empty());
	assert_eq!(
		type_ids(&actors),
		vec!["domainStory:Person", "domainStory:Group", "domainStory:System"]
	);
}

#[test]
fn entries_derive_name_and_default_icon_from_type_id() {
	let (actors, _) = TypeRegistry::initialize(ElementKind::Actor, &config());
	let person = actors.get("domainStory:Person").unwrap();

	assert_eq!(person.kind(), ElementKind::Actor);
	assert_eq!(person.display_name(), "Person");
	assert_eq!(person.icon_ref(), "icon-domain-story-person");
	assert_eq!(person.class_name(), "icon-domain-story-person");
}

#[test]
fn missing_section_yields_empty_registry_and_warning() {
	let config = IconsetConfig {
		actors: Some(TypeSection::Ids(vec!["domainStory:Person".into()])),
		work_objects: None,
	};

	let (work_objects, warnings) = TypeRegistry::initialize(ElementKind::WorkObject, &config);

	assert!(work_objects.is_empty());
	assert_eq!(
		warnings,
		vec![ConfigWarning::MissingSection {
			kind: ElementKind::WorkObject
		}]
	);
}

#[test]
fn duplicate_type_ids_keep_first_position() {
	let config = IconsetConfig::from_ids(
		["domainStory:Person", "domainStory:System", "domainStory:Person"],
		Vec::<String>::new(),
	);

	let (actors, warnings) = TypeRegistry::initialize(ElementKind::Actor, &config);

	assert_eq!(type_ids(&actors), vec!["domainStory:Person", "domainStory:System"]);
	assert_eq!(
		warnings,
		vec![ConfigWarning::DuplicateType {
			kind: ElementKind::Actor,
			type_id: "domainStory:Person".into(),
		}]
	);
}

#[test]
fn override_rebinds_only_listed_types() {
	let mut iconset = Iconset::from_config(&config());
	let payload: OverridePayload = [
		("domainStory:Person", "data:image/svg+xml,person"),
		("domainStory:Email", "email.svg"),
	]
	.into_iter()
	.collect();

	let outcome = iconset.override_icons(&payload);

	assert_eq!(outcome.applied, vec!["domainStory:Person", "domainStory:Email"]);
	assert!(outcome.ignored.is_empty());
	assert_eq!(
		iconset.get("domainStory:Person").unwrap().icon_ref(),
		"data:image/svg+xml,person"
	);
	assert_eq!(iconset.get("domainStory:Email").unwrap().icon_ref(), "email.svg");
	assert_eq!(
		iconset.get("domainStory:Group").unwrap().icon_ref(),
		"icon-domain-story-group"
	);
	assert_eq!(
		iconset.get("domainStory:Document").unwrap().icon_ref(),
		"icon-domain-story-document"
	);
}

#[test]
fn override_keeps_class_name_stable() {
	let mut iconset = Iconset::from_config(&config());
	let payload: OverridePayload = [("domainStory:System", "system.svg")].into_iter().collect();

	iconset.override_icons(&payload);

	assert_eq!(
		iconset.get("domainStory:System").unwrap().class_name(),
		"icon-domain-story-system"
	);
}

#[test]
fn override_never_adds_types() {
	let mut iconset = Iconset::from_config(&config());
	let payload: OverridePayload = [("domainStory:Robot", "robot.svg")].into_iter().collect();

	let outcome = iconset.override_icons(&payload);

	assert_eq!(outcome.ignored, vec!["domainStory:Robot"]);
	assert!(iconset.get("domainStory:Robot").is_none());
	assert_eq!(iconset.actors().len(), 3);
	assert_eq!(iconset.work_objects().len(), 2);
}

#[test]
fn override_is_idempotent() {
	let payload: OverridePayload = [
		("domainStory:Group", "group.svg"),
		("domainStory:Unknown", "unknown.svg"),
	]
	.into_iter()
	.collect();

	let mut once = Iconset::from_config(&config());
	once.override_icons(&payload);

	let mut twice = Iconset::from_config(&config());
	twice.override_icons(&payload);
	twice.override_icons(&payload);

	assert_eq!(once, twice);
}

#[test]
fn empty_override_changes_nothing() {
	let pristine = Iconset::from_config(&config());
	let mut overridden = pristine.clone();

	let outcome = overridden.override_icons(&OverridePayload::new());

	assert_eq!(outcome, Default::default());
	assert_eq!(pristine, overridden);
}

#[test]
fn custom_icons_lists_configured_and_overridden_sources() {
	let config = IconsetConfig::from_json_str(
		r#"{
			"actors": {"domainStory:Printer": "icons/printer.svg"},
			"workObjects": ["domainStory:Document", "domainStory:Email"]
		}"#,
	)
	.unwrap();
	let mut iconset = Iconset::from_config(&config);

	assert_eq!(
		iconset.custom_icons().iter().collect::<Vec<_>>(),
		vec![("domainStory:Printer", "icons/printer.svg")]
	);

	let payload: OverridePayload = [("domainStory:Email", "email.svg")].into_iter().collect();
	iconset.override_icons(&payload);

	assert_eq!(
		iconset.custom_icons().iter().collect::<Vec<_>>(),
		vec![
			("domainStory:Printer", "icons/printer.svg"),
			("domainStory:Email", "email.svg"),
		]
	);
	assert!(!iconset.get("domainStory:Document").unwrap().has_custom_icon());
}
