//! Style rules that make custom icons visible.
//!
//! Each custom icon becomes one rule that points the icon class of its type
//! at the new source. Rules are appended to the end of a [`StyleSink`], so a
//! later rule for the same class wins over the bundled one. Rules are never
//! retracted.

use std::fmt;

use storyline_iconset::{OverridePayload, icon_class_for_type};
use thiserror::Error;

/// Edge length of the icon box, in pixels.
pub const ICON_BOX_PX: u32 = 25;

/// Errors from a [`StyleSink`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
	#[error("rule index {index} is out of bounds for {len} rules")]
	IndexOutOfBounds { index: usize, len: usize },
	#[error("stylesheet rejected rule: {0}")]
	Rejected(String),
}

/// The live stylesheet of the running document.
pub trait StyleSink {
	fn rule_count(&self) -> usize;

	/// Inserts `rule` so that it ends up at position `index`.
	fn insert_rule(&mut self, rule: &str, index: usize) -> Result<(), StyleError>;
}

/// In-memory stylesheet for headless hosts and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
	rules: Vec<String>,
}

impl Stylesheet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn rules(&self) -> &[String] {
		&self.rules
	}
}

impl StyleSink for Stylesheet {
	fn rule_count(&self) -> usize {
		self.rules.len()
	}

	fn insert_rule(&mut self, rule: &str, index: usize) -> Result<(), StyleError> {
		if index > self.rules.len() {
			return Err(StyleError::IndexOutOfBounds {
				index,
				len: self.rules.len(),
			});
		}
		self.rules.insert(index, rule.to_owned());
		Ok(())
	}
}

/// Binds an icon class to a custom icon source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
	pub class_name: String,
	pub source: String,
}

impl StyleRule {
	/// Rule rendering `source` as the icon of `type_id`.
	pub fn for_type(type_id: &str, source: impl Into<String>) -> Self {
		Self {
			class_name: icon_class_for_type(type_id),
			source: source.into(),
		}
	}
}

impl fmt::Display for StyleRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// Escape so the source cannot close the url('...') literal.
		let source = self.source.replace('\\', "\\\\").replace('\'', "\\'");
		write!(
			f,
			".{}::before {{content: url('{source}'); background-repeat: no-repeat; \
			 width: {ICON_BOX_PX}px; height: {ICON_BOX_PX}px;}}",
			self.class_name
		)
	}
}

/// Appends one rule per payload entry at the end of `sink`.
///
/// Returns the rules in insertion order. Stops at the first rejected rule;
/// rules inserted before it stay in place.
pub fn inject(
	sink: &mut dyn StyleSink,
	payload: &OverridePayload,
) -> Result<Vec<StyleRule>, StyleError> {
	let mut injected = Vec::with_capacity(payload.len());

	for (type_id, source) in payload.iter() {
		let rule = StyleRule::for_type(type_id, source);
		let index = sink.rule_count();
		sink.insert_rule(&rule.to_string(), index)?;
		tracing::debug!(class = %rule.class_name, index, "injected icon style rule");
		injected.push(rule);
	}

	Ok(injected)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn rule_renders_fixed_icon_box() {
		let rule = StyleRule::for_type("domainStory:Person", "data:image/svg+xml,abc");

		assert_eq!(
			rule.to_string(),
			".icon-domain-story-person::before {content: url('data:image/svg+xml,abc'); \
			 background-repeat: no-repeat; width: 25px; height: 25px;}"
		);
	}

	#[test]
	fn rule_escapes_quotes_in_source() {
		let rule = StyleRule::for_type("domainStory:Person", "it's.svg");
		assert!(rule.to_string().contains(r"url('it\'s.svg')"));
	}

	#[test]
	fn inject_appends_after_existing_rules() {
		let mut sheet = Stylesheet::new();
		sheet.insert_rule(".bundled {}", 0).unwrap();
		let payload: OverridePayload = [
			("domainStory:Person", "person.svg"),
			("domainStory:Email", "email.svg"),
		]
		.into_iter()
		.collect();

		let rules = inject(&mut sheet, &payload).unwrap();

		assert_eq!(rules.len(), 2);
		assert_eq!(sheet.rules().len(), 3);
		assert_eq!(sheet.rules()[0], ".bundled {}");
		assert!(sheet.rules()[1].starts_with(".icon-domain-story-person::before"));
		assert!(sheet.rules()[2].starts_with(".icon-domain-story-email::before"));
	}

	#[test]
	fn empty_payload_leaves_sheet_untouched() {
		let mut sheet = Stylesheet::new();
		let rules = inject(&mut sheet, &OverridePayload::new()).unwrap();

		assert!(rules.is_empty());
		assert!(sheet.rules().is_empty());
	}

	#[test]
	fn stylesheet_rejects_out_of_range_index() {
		let mut sheet = Stylesheet::new();
		assert_eq!(
			sheet.insert_rule(".x {}", 1),
			Err(StyleError::IndexOutOfBounds { index: 1, len: 0 })
		);
	}
}
