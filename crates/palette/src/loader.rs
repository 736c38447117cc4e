//! One-shot loading of persisted icon overrides.

use storyline_iconset::{Iconset, OverrideOutcome, OverridePayload};

use crate::error::{PaletteError, Result};
use crate::storage::{APPENDED_ICONS_KEY, CustomizationStore};
use crate::style::{self, StyleSink};

/// Reads the persisted override payload.
///
/// Returns `Ok(None)` when no customization is stored (including an empty
/// record), and [`PaletteError::CustomizationCorrupt`] when the record does
/// not parse.
pub fn load(store: &dyn CustomizationStore) -> Result<Option<OverridePayload>> {
	let Some(raw) = store.get(APPENDED_ICONS_KEY)? else {
		return Ok(None);
	};
	if raw.trim().is_empty() {
		return Ok(None);
	}

	OverridePayload::from_json(&raw)
		.map(Some)
		.map_err(|source| PaletteError::CustomizationCorrupt {
			key: APPENDED_ICONS_KEY.to_owned(),
			source,
		})
}

/// Injects the style rules for `payload`, then rebinds registry icons.
///
/// The iconset is left untouched when the sink rejects a rule, so a failed
/// apply never reports icons the stylesheet does not show.
pub fn apply(
	iconset: &mut Iconset,
	sink: &mut dyn StyleSink,
	payload: &OverridePayload,
) -> Result<OverrideOutcome> {
	style::inject(sink, payload)?;
	Ok(iconset.override_icons(payload))
}

/// [`load`] followed by [`apply`]. Does nothing when no record is stored.
pub fn load_and_apply(
	store: &dyn CustomizationStore,
	iconset: &mut Iconset,
	sink: &mut dyn StyleSink,
) -> Result<Option<OverrideOutcome>> {
	match load(store)? {
		Some(payload) => apply(iconset, sink, &payload).map(Some),
		None => Ok(None),
	}
}

/// Persists `payload` as the user's customization.
pub fn save_overrides(
	store: &mut dyn CustomizationStore,
	payload: &OverridePayload,
) -> Result<()> {
	let raw = payload.to_json().map_err(|source| PaletteError::Encode {
		key: APPENDED_ICONS_KEY.to_owned(),
		source,
	})?;
	store.set(APPENDED_ICONS_KEY, raw)?;
	Ok(())
}

/// Drops the persisted customization.
pub fn clear_overrides(store: &mut dyn CustomizationStore) -> Result<()> {
	store.remove(APPENDED_ICONS_KEY)?;
	Ok(())
}

#[cfg(test)]
mod tests;
