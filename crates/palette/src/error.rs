//! Error types for palette construction and activation.

use thiserror::Error;

use crate::host::HostError;
use crate::storage::StoreError;
use crate::style::StyleError;

/// Errors raised by the palette subsystem.
#[derive(Debug, Error)]
pub enum PaletteError {
	/// A persisted customization record exists but does not parse.
	///
	/// The palette falls back to uncustomized icons when this happens.
	#[error("customization record '{key}' is corrupt: {source}")]
	CustomizationCorrupt {
		/// Storage key of the record.
		key: String,
		/// The underlying parse error.
		#[source]
		source: serde_json::Error,
	},

	/// A customization could not be encoded for storage.
	#[error("failed to encode customization record '{key}': {source}")]
	Encode {
		key: String,
		#[source]
		source: serde_json::Error,
	},

	/// The customization store could not be read or written.
	#[error(transparent)]
	Storage(#[from] StoreError),

	/// The style sink rejected a synthesized rule.
	#[error(transparent)]
	Style(#[from] StyleError),

	/// A host service failed; passed through unchanged.
	#[error(transparent)]
	Host(#[from] HostError),
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
