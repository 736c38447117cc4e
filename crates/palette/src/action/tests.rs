use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::error::PaletteError;
use crate::headless::HeadlessHost;
use crate::host::{HostError, PointerKind};

#[rstest]
#[case("domainStory:ActorPerson", None, "Create ActorPerson")]
#[case("domainStory:WorkObject1", None, "Create WorkObject1")]
#[case("domainStory:group", Some("group"), "Create group")]
#[case("domainStory:Actor1", Some("Customer"), "Create Customer")]
fn title_defaults_to_local_name(
	#[case] type_id: &str,
	#[case] title: Option<&str>,
	#[case] expected: &str,
) {
	assert_eq!(create_title(type_id, title), expected);
}

#[test]
fn entry_carries_group_class_and_both_handlers() {
	let host = HeadlessHost::new();
	let factory = ActionFactory::new(&host.services());

	let entry = factory.create_action(
		"domainStory:ActorPerson",
		"actor",
		"icon-domain-story-actorperson",
		None,
		None,
	);

	assert_eq!(entry.group(), "actor");
	assert_eq!(entry.class_name(), Some("icon-domain-story-actorperson"));
	assert_eq!(entry.title(), Some("Create ActorPerson"));
	assert!(entry.action().unwrap().drag_start.is_some());
}

#[test]
fn click_creates_shape_and_starts_placement() {
	let host = HeadlessHost::new();
	let factory = ActionFactory::new(&host.services());
	let entry = factory.create_action("domainStory:Person", "actor", "c", None, None);

	entry.click(&PointerEvent::click(10.0, 20.0)).unwrap();

	let started = host.started_creations();
	assert_eq!(started.len(), 1);
	let (event, shape) = &started[0];
	assert_eq!(event.kind, PointerKind::Click);
	assert_eq!(shape.type_id, "domainStory:Person");
	assert_eq!(shape.business_object.id.as_deref(), Some(shape.id.as_str()));
	assert_eq!(shape.business_object.di.is_expanded, None);
}

#[test]
fn drag_start_runs_the_same_creation() {
	let host = HeadlessHost::new();
	let factory = ActionFactory::new(&host.services());
	let entry = factory.create_action("domainStory:Person", "actor", "c", None, None);

	assert!(entry.drag_start(&PointerEvent::drag_start(1.0, 1.0)).unwrap());
	entry.click(&PointerEvent::click(2.0, 2.0)).unwrap();

	let started = host.started_creations();
	assert_eq!(started.len(), 2);
	assert_eq!(started[0].0.kind, PointerKind::DragStart);
	assert_eq!(started[0].1.id, "shape_1");
	assert_eq!(started[1].1.id, "shape_2");
}

#[test]
fn options_reach_factory_and_diagram_interchange() {
	let host = HeadlessHost::new();
	let factory = ActionFactory::new(&host.services());
	let options = CreateOptions {
		is_expanded: Some(true),
	};
	let entry =
		factory.create_action("domainStory:group", "group", "c", Some("group"), Some(options));

	entry.click(&PointerEvent::click(0.0, 0.0)).unwrap();

	assert_eq!(host.requested_shapes()[0].options, options);
	assert_eq!(
		host.started_creations()[0].1.business_object.di.is_expanded,
		Some(true)
	);
}

#[test]
fn unknown_type_propagates_host_error() {
	let host = HeadlessHost::with_known_types(["domainStory:Person"]);
	let factory = ActionFactory::new(&host.services());
	let entry = factory.create_action("domainStory:Robot", "actor", "c", None, None);

	let err = entry.click(&PointerEvent::click(0.0, 0.0)).unwrap_err();

	assert!(matches!(
		err,
		PaletteError::Host(HostError::UnknownType(ref type_id)) if type_id == "domainStory:Robot"
	));
	assert!(host.started_creations().is_empty());
}
