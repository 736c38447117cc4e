//! Assembly of the ordered palette.

use std::rc::Rc;

use storyline_iconset::{GROUP_TYPE, Iconset, TypeRegistry};

use crate::action::ActionFactory;
use crate::entries::{EntryAction, Handler, PaletteEntries, PaletteEntry};
use crate::error::Result;
use crate::host::{HostServices, LassoTool, PointerEvent, SpaceTool};

/// Palette group shared by actor and work-object buttons.
pub const ACTOR_GROUP: &str = "actor";
pub const WORK_OBJECT_GROUP: &str = "workObject";
pub const GROUP_GROUP: &str = "group";
pub const TOOLS_GROUP: &str = "tools";

const ACTOR_KEY_PREFIX: &str = "domainStory-actor";
const WORK_OBJECT_KEY_PREFIX: &str = "domainStory-workObject";

const GROUP_TOOL_CLASS: &str = "icon-domain-story-tool-group";
const LASSO_TOOL_CLASS: &str = "bpmn-icon-lasso-tool";
const SPACE_TOOL_CLASS: &str = "bpmn-icon-space-tool";

/// Turns an [`Iconset`] into palette entries.
#[derive(Clone)]
pub struct PaletteAssembler {
	actions: ActionFactory,
	space_tool: Rc<dyn SpaceTool>,
	lasso_tool: Rc<dyn LassoTool>,
}

impl PaletteAssembler {
	pub fn new(services: &HostServices) -> Self {
		Self {
			actions: ActionFactory::new(services),
			space_tool: Rc::clone(&services.space_tool),
			lasso_tool: Rc::clone(&services.lasso_tool),
		}
	}

	/// Builds the palette in its fixed visual order.
	///
	/// Actors, `actor-separator`, work objects, `workObject-separator`, the
	/// group tool, `group-separator`, the lasso tool and the space tool. Work
	/// objects render in the actor group so both categories share one block.
	pub fn assemble(&self, iconset: &Iconset) -> PaletteEntries {
		let mut entries = PaletteEntries::new();

		self.push_types(&mut entries, iconset.actors(), ACTOR_KEY_PREFIX);
		entries.insert("actor-separator", PaletteEntry::separator(ACTOR_GROUP));

		self.push_types(&mut entries, iconset.work_objects(), WORK_OBJECT_KEY_PREFIX);
		entries.insert("workObject-separator", PaletteEntry::separator(WORK_OBJECT_GROUP));

		entries.insert(
			"domainStory-group",
			self.actions
				.create_action(GROUP_TYPE, GROUP_GROUP, GROUP_TOOL_CLASS, Some("group"), None),
		);
		entries.insert("group-separator", PaletteEntry::separator(GROUP_GROUP));

		let lasso_tool = Rc::clone(&self.lasso_tool);
		let lasso: Handler = Rc::new(move |event: &PointerEvent| -> Result<()> {
			lasso_tool.activate_selection(event);
			Ok(())
		});
		entries.insert(
			"lasso-tool",
			tool_entry(LASSO_TOOL_CLASS, "Activate the lasso tool", lasso),
		);

		let space_tool = Rc::clone(&self.space_tool);
		let space: Handler = Rc::new(move |event: &PointerEvent| -> Result<()> {
			space_tool.activate_selection(event);
			Ok(())
		});
		entries.insert(
			"space-tool",
			tool_entry(SPACE_TOOL_CLASS, "Activate the create/remove space tool", space),
		);

		entries
	}

	/// Keys are `<prefix><display name>`. Types from different namespaces can
	/// share a display name; later ones fall back to `<prefix><type id>`.
	fn push_types(&self, entries: &mut PaletteEntries, registry: &TypeRegistry, key_prefix: &str) {
		for entry in registry.entries() {
			let name = entry.display_name();
			let action = self.actions.create_action(
				entry.type_id(),
				ACTOR_GROUP,
				&entry.class_name(),
				Some(name),
				None,
			);

			let mut key = format!("{key_prefix}{name}");
			if entries.get(&key).is_some() {
				tracing::warn!(
					type_id = entry.type_id(),
					%key,
					"palette key already taken, keying by type id"
				);
				key = format!("{key_prefix}{}", entry.type_id());
			}
			entries.insert(key, action);
		}
	}
}

fn tool_entry(class_name: &str, title: &str, click: Handler) -> PaletteEntry {
	PaletteEntry::Action {
		group: TOOLS_GROUP.to_owned(),
		class_name: class_name.to_owned(),
		title: title.to_owned(),
		action: EntryAction::click_only(click),
	}
}
