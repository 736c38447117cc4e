//! Creation actions: palette buttons that instantiate and place a shape.

use std::rc::Rc;

use storyline_iconset::name_from_type;

use crate::entries::{EntryAction, Handler, PaletteEntry};
use crate::error::Result;
use crate::host::{Create, CreateOptions, ElementFactory, HostServices, PointerEvent, ShapeAttrs};

/// Builds palette entries whose activation starts an interactive creation.
#[derive(Clone)]
pub struct ActionFactory {
	element_factory: Rc<dyn ElementFactory>,
	create: Rc<dyn Create>,
}

impl ActionFactory {
	pub fn new(services: &HostServices) -> Self {
		Self {
			element_factory: Rc::clone(&services.element_factory),
			create: Rc::clone(&services.create),
		}
	}

	/// Returns an entry that creates a `type_id` shape on drag-start or click.
	///
	/// On activation the shape is created through the host factory with
	/// `options` applied, its id is copied onto its business object, and the
	/// shape is handed to the host's interactive creation together with the
	/// triggering event. Factory failures are returned to the caller as-is.
	pub fn create_action(
		&self,
		type_id: &str,
		group: &str,
		class_name: &str,
		title: Option<&str>,
		options: Option<CreateOptions>,
	) -> PaletteEntry {
		let element_factory = Rc::clone(&self.element_factory);
		let create = Rc::clone(&self.create);
		let shape_type = type_id.to_owned();

		let listener: Handler = Rc::new(move |event: &PointerEvent| -> Result<()> {
			let mut shape = element_factory.create_shape(ShapeAttrs {
				type_id: shape_type.clone(),
				options: options.unwrap_or_default(),
			})?;

			shape.business_object.id = Some(shape.id.clone());
			if let Some(options) = options {
				shape.business_object.di.is_expanded = options.is_expanded;
			}

			create.start(event, shape);
			Ok(())
		});

		PaletteEntry::Action {
			group: group.to_owned(),
			class_name: class_name.to_owned(),
			title: create_title(type_id, title),
			action: EntryAction::drag_and_click(listener),
		}
	}
}

/// `"Create <title>"`, falling back to the type's local name.
pub fn create_title(type_id: &str, title: Option<&str>) -> String {
	format!("Create {}", title.unwrap_or_else(|| name_from_type(type_id)))
}

#[cfg(test)]
mod tests;
