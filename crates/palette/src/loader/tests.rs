use pretty_assertions::assert_eq;
use storyline_iconset::IconsetConfig;

use super::*;
use crate::storage::MemoryStore;
use crate::style::{StyleError, Stylesheet};

/// Accepts `capacity` rules, then rejects the rest.
struct BoundedSheet {
	inner: Stylesheet,
	capacity: usize,
}

impl StyleSink for BoundedSheet {
	fn rule_count(&self) -> usize {
		self.inner.rule_count()
	}

	fn insert_rule(&mut self, rule: &str, index: usize) -> std::result::Result<(), StyleError> {
		if self.inner.rule_count() >= self.capacity {
			return Err(StyleError::Rejected(rule.to_owned()));
		}
		self.inner.insert_rule(rule, index)
	}
}

fn iconset() -> Iconset {
	Iconset::from_config(&IconsetConfig::from_ids(
		["domainStory:Person"],
		["domainStory:Document"],
	))
}

#[test]
fn absent_record_loads_nothing() {
	assert_eq!(load(&MemoryStore::new()).unwrap(), None);
}

#[test]
fn blank_record_loads_nothing() {
	let store = MemoryStore::with_record(APPENDED_ICONS_KEY, "  ");
	assert_eq!(load(&store).unwrap(), None);
}

#[test]
fn valid_record_parses_in_order() {
	let store = MemoryStore::with_record(
		APPENDED_ICONS_KEY,
		r#"{"domainStory:Person": "p.svg", "domainStory:Document": "d.svg"}"#,
	);

	let payload = load(&store).unwrap().unwrap();

	assert_eq!(
		payload.iter().collect::<Vec<_>>(),
		vec![("domainStory:Person", "p.svg"), ("domainStory:Document", "d.svg")]
	);
}

#[test]
fn corrupt_record_is_reported() {
	let store = MemoryStore::with_record(APPENDED_ICONS_KEY, "{not json");

	match load(&store) {
		Err(PaletteError::CustomizationCorrupt { key, .. }) => assert_eq!(key, APPENDED_ICONS_KEY),
		other => panic!("expected corrupt customization, got {other:?}"),
	}
}

#[test]
fn non_string_values_are_corrupt() {
	let store = MemoryStore::with_record(APPENDED_ICONS_KEY, r#"{"domainStory:Person": 7}"#);
	assert!(matches!(load(&store), Err(PaletteError::CustomizationCorrupt { .. })));
}

#[test]
fn load_and_apply_rebinds_icons_and_injects_rules() {
	let store = MemoryStore::with_record(
		APPENDED_ICONS_KEY,
		r#"{"domainStory:Person": "p.svg", "domainStory:Ghost": "g.svg"}"#,
	);
	let mut iconset = iconset();
	let mut sheet = Stylesheet::new();

	let outcome = load_and_apply(&store, &mut iconset, &mut sheet).unwrap().unwrap();

	assert_eq!(outcome.applied, vec!["domainStory:Person"]);
	assert_eq!(outcome.ignored, vec!["domainStory:Ghost"]);
	assert_eq!(iconset.get("domainStory:Person").unwrap().icon_ref(), "p.svg");
	assert_eq!(sheet.rules().len(), 2);
}

#[test]
fn load_and_apply_without_record_is_a_no_op() {
	let mut iconset = iconset();
	let mut sheet = Stylesheet::new();

	let outcome = load_and_apply(&MemoryStore::new(), &mut iconset, &mut sheet).unwrap();

	assert_eq!(outcome, None);
	assert_eq!(iconset, self::iconset());
	assert!(sheet.rules().is_empty());
}

#[test]
fn saved_overrides_load_back() {
	let mut store = MemoryStore::new();
	let payload: OverridePayload = [("domainStory:Person", "data:image/png;base64,AAAA")]
		.into_iter()
		.collect();

	save_overrides(&mut store, &payload).unwrap();
	assert_eq!(load(&store).unwrap(), Some(payload));

	clear_overrides(&mut store).unwrap();
	assert_eq!(load(&store).unwrap(), None);
}

#[test]
fn rejected_rule_leaves_iconset_untouched() {
	let payload: OverridePayload = [
		("domainStory:Person", "p.svg"),
		("domainStory:Document", "d.svg"),
	]
	.into_iter()
	.collect();
	let mut iconset = iconset();
	let mut sheet = BoundedSheet {
		inner: Stylesheet::new(),
		capacity: 1,
	};

	let result = apply(&mut iconset, &mut sheet, &payload);

	assert!(matches!(
		result,
		Err(PaletteError::Style(StyleError::Rejected(_)))
	));
	assert_eq!(iconset, self::iconset());
	assert_eq!(sheet.inner.rules().len(), 1);
}

#[test]
fn encode_failure_is_not_reported_as_corruption() {
	let source = serde_json::from_str::<u8>("x").unwrap_err();
	let err = PaletteError::Encode {
		key: APPENDED_ICONS_KEY.to_owned(),
		source,
	};

	assert!(err.to_string().starts_with("failed to encode customization record 'appendedIcons'"));
	assert!(!matches!(err, PaletteError::CustomizationCorrupt { .. }));
}
