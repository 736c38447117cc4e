//! In-memory host for running the palette without a document.
//!
//! [`HeadlessHost`] implements every host trait and records what the palette
//! asked of it. Shapes are numbered `shape_1`, `shape_2`, ... in creation
//! order.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::host::{
	BusinessObject, Create, DiagramInterchange, ElementFactory, HostError, HostServices, LassoTool,
	PaletteProvider, PaletteService, PointerEvent, Shape, ShapeAttrs, SpaceTool,
};

#[derive(Default)]
pub struct HeadlessHost {
	known_types: Option<HashSet<String>>,
	next_id: Cell<u64>,
	requested: RefCell<Vec<ShapeAttrs>>,
	started: RefCell<Vec<(PointerEvent, Shape)>>,
	lasso_activations: RefCell<Vec<PointerEvent>>,
	space_activations: RefCell<Vec<PointerEvent>>,
	providers: RefCell<Vec<Rc<dyn PaletteProvider>>>,
}

impl HeadlessHost {
	/// A host whose factory accepts every type id.
	pub fn new() -> Rc<Self> {
		Rc::new(Self::default())
	}

	/// A host whose factory rejects type ids outside `types`.
	pub fn with_known_types<I, S>(types: I) -> Rc<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Rc::new(Self {
			known_types: Some(types.into_iter().map(Into::into).collect()),
			..Self::default()
		})
	}

	/// Wires this host in as every service a palette provider needs.
	pub fn services(self: &Rc<Self>) -> HostServices {
		HostServices {
			element_factory: Rc::clone(self) as Rc<dyn ElementFactory>,
			create: Rc::clone(self) as Rc<dyn Create>,
			space_tool: Rc::clone(self) as Rc<dyn SpaceTool>,
			lasso_tool: Rc::clone(self) as Rc<dyn LassoTool>,
		}
	}

	/// Registered providers, in registration order.
	pub fn providers(&self) -> Vec<Rc<dyn PaletteProvider>> {
		self.providers.borrow().clone()
	}

	/// Every request the factory received, including rejected ones.
	pub fn requested_shapes(&self) -> Vec<ShapeAttrs> {
		self.requested.borrow().clone()
	}

	/// Shapes handed to interactive creation, with the triggering event.
	pub fn started_creations(&self) -> Vec<(PointerEvent, Shape)> {
		self.started.borrow().clone()
	}

	pub fn lasso_activations(&self) -> Vec<PointerEvent> {
		self.lasso_activations.borrow().clone()
	}

	pub fn space_activations(&self) -> Vec<PointerEvent> {
		self.space_activations.borrow().clone()
	}
}

impl ElementFactory for HeadlessHost {
	fn create_shape(&self, attrs: ShapeAttrs) -> Result<Shape, HostError> {
		self.requested.borrow_mut().push(attrs.clone());

		if self
			.known_types
			.as_ref()
			.is_some_and(|known| !known.contains(&attrs.type_id))
		{
			return Err(HostError::UnknownType(attrs.type_id));
		}

		let id = self.next_id.get() + 1;
		self.next_id.set(id);

		Ok(Shape {
			id: format!("shape_{id}"),
			type_id: attrs.type_id.clone(),
			business_object: BusinessObject {
				id: None,
				type_id: attrs.type_id,
				di: DiagramInterchange::default(),
			},
		})
	}
}

impl Create for HeadlessHost {
	fn start(&self, event: &PointerEvent, shape: Shape) {
		tracing::trace!(shape = %shape.id, kind = ?event.kind, "headless creation started");
		self.started.borrow_mut().push((*event, shape));
	}
}

impl SpaceTool for HeadlessHost {
	fn activate_selection(&self, event: &PointerEvent) {
		self.space_activations.borrow_mut().push(*event);
	}
}

impl LassoTool for HeadlessHost {
	fn activate_selection(&self, event: &PointerEvent) {
		self.lasso_activations.borrow_mut().push(*event);
	}
}

impl PaletteService for HeadlessHost {
	fn register_provider(&self, provider: Rc<dyn PaletteProvider>) {
		self.providers.borrow_mut().push(provider);
	}
}
