//! The palette provider registered with the host.

use std::fmt;
use std::rc::Rc;

use storyline_iconset::{Iconset, IconsetConfig, OverrideOutcome};

use crate::assemble::PaletteAssembler;
use crate::entries::PaletteEntries;
use crate::error::PaletteError;
use crate::host::{HostService, HostServices, PaletteProvider, PaletteService};
use crate::loader;
use crate::storage::CustomizationStore;
use crate::style::{self, StyleSink};

/// Domain-story palette provider.
///
/// Owns the session's [`Iconset`]. The iconset is built and customized once,
/// in [`DomainStoryPalette::new`], and only read afterwards.
pub struct DomainStoryPalette {
	iconset: Iconset,
	assembler: PaletteAssembler,
	customization: Option<OverrideOutcome>,
	load_error: Option<PaletteError>,
}

impl DomainStoryPalette {
	/// Host services this provider depends on.
	pub const DEPENDENCIES: &'static [HostService] = &[
		HostService::Palette,
		HostService::Create,
		HostService::ElementFactory,
		HostService::SpaceTool,
		HostService::LassoTool,
	];

	/// Builds the iconset from `config` and applies the stored customization.
	///
	/// Types the configuration binds to explicit icon sources get their style
	/// rules first, so a stored customization for the same type wins. A
	/// customization that cannot be read or applied is logged and kept in
	/// [`DomainStoryPalette::load_error`]; the palette then shows the icons
	/// it has without failing construction.
	pub fn new(
		services: &HostServices,
		config: &IconsetConfig,
		store: &dyn CustomizationStore,
		sink: &mut dyn StyleSink,
	) -> Self {
		let mut iconset = Iconset::from_config(config);
		for warning in iconset.warnings() {
			tracing::warn!(%warning, "iconset config");
		}

		let mut load_error = None;
		if let Err(err) = style::inject(sink, &iconset.custom_icons()) {
			tracing::error!(error = %err, "failed to style configured icons");
			load_error = Some(PaletteError::from(err));
		}

		let customization = match loader::load(store) {
			Ok(None) => None,
			Ok(Some(payload)) => match loader::apply(&mut iconset, sink, &payload) {
				Ok(outcome) => Some(outcome),
				Err(err) => {
					tracing::error!(error = %err, "failed to apply icon customization");
					load_error = load_error.or(Some(err));
					None
				}
			},
			Err(err) => {
				tracing::error!(error = %err, "ignoring icon customization");
				load_error = load_error.or(Some(err));
				None
			}
		};

		Self {
			iconset,
			assembler: PaletteAssembler::new(services),
			customization,
			load_error,
		}
	}

	/// Constructs the provider and registers it with `palette`.
	pub fn register(
		palette: &dyn PaletteService,
		services: &HostServices,
		config: &IconsetConfig,
		store: &dyn CustomizationStore,
		sink: &mut dyn StyleSink,
	) -> Rc<Self> {
		let provider = Rc::new(Self::new(services, config, store, sink));
		palette.register_provider(Rc::clone(&provider) as Rc<dyn PaletteProvider>);
		tracing::debug!(
			actors = provider.iconset.actors().len(),
			work_objects = provider.iconset.work_objects().len(),
			customized = provider.customization.is_some(),
			"domain-story palette registered"
		);
		provider
	}

	pub fn iconset(&self) -> &Iconset {
		&self.iconset
	}

	/// What the stored customization changed, if one was applied.
	pub fn customization(&self) -> Option<&OverrideOutcome> {
		self.customization.as_ref()
	}

	/// The first error met while styling icons or applying the stored
	/// customization.
	pub fn load_error(&self) -> Option<&PaletteError> {
		self.load_error.as_ref()
	}
}

impl PaletteProvider for DomainStoryPalette {
	fn palette_entries(&self) -> PaletteEntries {
		self.assembler.assemble(&self.iconset)
	}
}

impl fmt::Debug for DomainStoryPalette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DomainStoryPalette")
			.field("iconset", &self.iconset)
			.field("customization", &self.customization)
			.field("load_error", &self.load_error)
			.finish_non_exhaustive()
	}
}
