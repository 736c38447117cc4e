//! Shape-creation palette for the domain-story editor.
//!
//! [`DomainStoryPalette`] registers itself with the host's [`PaletteService`]
//! and answers every palette query with a fresh, ordered [`PaletteEntries`]
//! set built from an [`Iconset`](storyline_iconset::Iconset):
//!
//! ```text
//! actors | actor-separator | work objects | workObject-separator
//!   | group tool | group-separator | lasso tool | space tool
//! ```
//!
//! On construction the palette appends one style rule per configured icon
//! source to the injected [`StyleSink`], then reads the user's icon
//! customization from a [`CustomizationStore`] and styles and rebinds those
//! icons the same way.
//!
//! All host collaborators are traits in [`host`]; [`headless`] implements
//! them in memory for embedding without a document and for tests.

pub mod action;
pub mod assemble;
pub mod entries;
pub mod error;
pub mod headless;
pub mod host;
pub mod loader;
pub mod provider;
pub mod storage;
pub mod style;

pub use action::{ActionFactory, create_title};
pub use assemble::PaletteAssembler;
pub use entries::{EntryAction, Handler, PaletteEntries, PaletteEntry};
pub use error::{PaletteError, Result};
pub use headless::HeadlessHost;
pub use host::{
	BusinessObject, Create, CreateOptions, DiagramInterchange, ElementFactory, HostError,
	HostService, HostServices, LassoTool, PaletteProvider, PaletteService, PointerEvent,
	PointerKind, Shape, ShapeAttrs, SpaceTool,
};
pub use provider::DomainStoryPalette;
pub use storage::{APPENDED_ICONS_KEY, CustomizationStore, FileStore, MemoryStore, StoreError};
pub use style::{StyleError, StyleRule, StyleSink, Stylesheet};
