//! Contract with the hosting diagram editor.
//!
//! The palette never touches the host's shape model directly. It asks the
//! [`ElementFactory`] for shapes, hands them to [`Create`] for placement and
//! forwards tool activations to [`LassoTool`] and [`SpaceTool`].

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::entries::PaletteEntries;

/// Pointer input that activated a palette entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
	pub kind: PointerKind,
	pub x: f64,
	pub y: f64,
}

impl PointerEvent {
	pub fn click(x: f64, y: f64) -> Self {
		Self {
			kind: PointerKind::Click,
			x,
			y,
		}
	}

	pub fn drag_start(x: f64, y: f64) -> Self {
		Self {
			kind: PointerKind::DragStart,
			x,
			y,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
	Click,
	DragStart,
}

/// Extra attributes forwarded into a newly created shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateOptions {
	/// Initial expanded/collapsed state, stored in the diagram-interchange data.
	pub is_expanded: Option<bool>,
}

/// Request passed to [`ElementFactory::create_shape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeAttrs {
	pub type_id: String,
	pub options: CreateOptions,
}

/// Diagram-interchange metadata of a shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramInterchange {
	pub is_expanded: Option<bool>,
}

/// Model data behind a shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessObject {
	pub id: Option<String>,
	pub type_id: String,
	pub di: DiagramInterchange,
}

/// A shape instantiated by the host but not yet placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
	pub id: String,
	pub type_id: String,
	pub business_object: BusinessObject,
}

/// Failure reported by a host service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	/// The shape factory does not model the requested type.
	#[error("unknown element type: {0}")]
	UnknownType(String),
	/// The host refused the request for its own reasons.
	#[error("host rejected request: {0}")]
	Rejected(String),
}

/// Instantiates shapes for a type id.
pub trait ElementFactory {
	fn create_shape(&self, attrs: ShapeAttrs) -> Result<Shape, HostError>;
}

/// Interactive creation: drag-to-place or click-to-place of a new shape.
///
/// `start` hands control of the gesture to the host; the palette does not
/// track or cancel it.
pub trait Create {
	fn start(&self, event: &PointerEvent, shape: Shape);
}

pub trait SpaceTool {
	fn activate_selection(&self, event: &PointerEvent);
}

pub trait LassoTool {
	fn activate_selection(&self, event: &PointerEvent);
}

/// Supplies palette entries on demand.
pub trait PaletteProvider {
	/// Returns the full, ordered entry set. Called on every palette query.
	fn palette_entries(&self) -> PaletteEntries;
}

/// The host's palette UI, which queries registered providers.
pub trait PaletteService {
	fn register_provider(&self, provider: Rc<dyn PaletteProvider>);
}

/// Host services a palette provider is wired to.
#[derive(Clone)]
pub struct HostServices {
	pub element_factory: Rc<dyn ElementFactory>,
	pub create: Rc<dyn Create>,
	pub space_tool: Rc<dyn SpaceTool>,
	pub lasso_tool: Rc<dyn LassoTool>,
}

impl fmt::Debug for HostServices {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HostServices").finish_non_exhaustive()
	}
}

/// Names of the host services a provider declares as dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostService {
	Palette,
	Create,
	ElementFactory,
	SpaceTool,
	LassoTool,
}

impl HostService {
	/// Service name as registered in the host's service container.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Palette => "palette",
			Self::Create => "create",
			Self::ElementFactory => "elementFactory",
			Self::SpaceTool => "spaceTool",
			Self::LassoTool => "lassoTool",
		}
	}
}

impl fmt::Display for HostService {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
