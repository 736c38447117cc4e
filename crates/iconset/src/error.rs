//! Error types for iconset configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading an iconset configuration.
#[derive(Debug, Error)]
pub enum IconsetError {
	/// Error parsing JSON syntax.
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// Error parsing TOML syntax.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for iconset operations.
pub type Result<T> = std::result::Result<T, IconsetError>;
