//! Palette entries as handed to the host's palette UI.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::error::Result;
use crate::host::PointerEvent;

/// Activation callback of a palette entry.
pub type Handler = Rc<dyn Fn(&PointerEvent) -> Result<()>>;

/// Handlers bound to a palette button.
#[derive(Clone)]
pub struct EntryAction {
	/// Fired when the user starts dragging from the button.
	pub drag_start: Option<Handler>,
	/// Fired when the user clicks the button.
	pub click: Handler,
}

impl EntryAction {
	/// Binds the same handler to drag-start and click.
	pub fn drag_and_click(handler: Handler) -> Self {
		Self {
			drag_start: Some(Rc::clone(&handler)),
			click: handler,
		}
	}

	pub fn click_only(handler: Handler) -> Self {
		Self {
			drag_start: None,
			click: handler,
		}
	}
}

/// One palette button or separator.
#[derive(Clone)]
pub enum PaletteEntry {
	Separator {
		group: String,
	},
	Action {
		group: String,
		class_name: String,
		title: String,
		action: EntryAction,
	},
}

impl PaletteEntry {
	pub fn separator(group: impl Into<String>) -> Self {
		Self::Separator {
			group: group.into(),
		}
	}

	pub fn group(&self) -> &str {
		match self {
			Self::Separator { group } | Self::Action { group, .. } => group,
		}
	}

	pub fn is_separator(&self) -> bool {
		matches!(self, Self::Separator { .. })
	}

	pub fn title(&self) -> Option<&str> {
		match self {
			Self::Action { title, .. } => Some(title.as_str()),
			Self::Separator { .. } => None,
		}
	}

	pub fn class_name(&self) -> Option<&str> {
		match self {
			Self::Action { class_name, .. } => Some(class_name.as_str()),
			Self::Separator { .. } => None,
		}
	}

	pub fn action(&self) -> Option<&EntryAction> {
		match self {
			Self::Action { action, .. } => Some(action),
			Self::Separator { .. } => None,
		}
	}

	/// Runs the click handler. Separators ignore clicks.
	pub fn click(&self, event: &PointerEvent) -> Result<()> {
		match self.action() {
			Some(action) => (action.click)(event),
			None => Ok(()),
		}
	}

	/// Runs the drag-start handler, if the entry has one.
	///
	/// Returns `Ok(false)` when the entry does not react to dragging.
	pub fn drag_start(&self, event: &PointerEvent) -> Result<bool> {
		match self.action().and_then(|action| action.drag_start.as_ref()) {
			Some(handler) => handler(event).map(|()| true),
			None => Ok(false),
		}
	}
}

impl fmt::Debug for PaletteEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Separator { group } => f.debug_struct("Separator").field("group", group).finish(),
			Self::Action {
				group,
				class_name,
				title,
				action,
			} => f
				.debug_struct("Action")
				.field("group", group)
				.field("class_name", class_name)
				.field("title", title)
				.field("drag_start", &action.drag_start.is_some())
				.finish_non_exhaustive(),
		}
	}
}

/// Serializes the host-visible shape of an entry. Handlers appear as `true`
/// markers under `action`.
impl Serialize for PaletteEntry {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Separator { group } => {
				let mut state = serializer.serialize_struct("Separator", 2)?;
				state.serialize_field("group", group)?;
				state.serialize_field("separator", &true)?;
				state.end()
			}
			Self::Action {
				group,
				class_name,
				title,
				action,
			} => {
				let mut state = serializer.serialize_struct("Action", 4)?;
				state.serialize_field("group", group)?;
				state.serialize_field("className", class_name)?;
				state.serialize_field("title", title)?;
				state.serialize_field("action", &ActionMarkers(action))?;
				state.end()
			}
		}
	}
}

struct ActionMarkers<'a>(&'a EntryAction);

impl Serialize for ActionMarkers<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let len = if self.0.drag_start.is_some() { 2 } else { 1 };
		let mut map = serializer.serialize_map(Some(len))?;
		if self.0.drag_start.is_some() {
			map.serialize_entry("dragstart", &true)?;
		}
		map.serialize_entry("click", &true)?;
		map.end()
	}
}

/// Keyed palette entries. Iteration order is the visual order.
#[derive(Clone, Default)]
pub struct PaletteEntries(IndexMap<String, PaletteEntry>);

impl PaletteEntries {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `entry` under `key`.
	///
	/// Reusing a key replaces the entry in place, keeping its original position.
	pub fn insert(&mut self, key: impl Into<String>, entry: PaletteEntry) -> Option<PaletteEntry> {
		self.0.insert(key.into(), entry)
	}

	pub fn get(&self, key: &str) -> Option<&PaletteEntry> {
		self.0.get(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &PaletteEntry)> {
		self.0.iter().map(|(key, entry)| (key.as_str(), entry))
	}

	/// Non-separator entries, in order.
	pub fn actions(&self) -> impl Iterator<Item = (&str, &PaletteEntry)> {
		self.iter().filter(|(_, entry)| !entry.is_separator())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Host-visible JSON form, handlers rendered as markers.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}
}

impl fmt::Debug for PaletteEntries {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}

impl Serialize for PaletteEntries {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (key, entry) in &self.0 {
			map.serialize_entry(key, entry)?;
		}
		map.end()
	}
}
