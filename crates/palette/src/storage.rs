//! Persisted customization records.
//!
//! The palette only reads one string-valued record, [`APPENDED_ICONS_KEY`].
//! The write half exists for the customization UI that produces it.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage key of the user's icon overrides.
pub const APPENDED_ICONS_KEY: &str = "appendedIcons";

/// Errors from a [`CustomizationStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Error reading or writing the backing file.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path of the backing file.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The backing file is not a JSON object of strings.
	#[error("malformed store file {path}: {error}")]
	Format {
		/// Path of the backing file.
		path: PathBuf,
		/// The underlying parse error.
		error: serde_json::Error,
	},
}

/// String-keyed, string-valued persistent storage.
pub trait CustomizationStore {
	/// Returns the value under `key`, or `None` if nothing is stored.
	fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

	fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

	fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store; contents live as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	values: HashMap<String, String>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store holding one record.
	pub fn with_record(key: impl Into<String>, value: impl Into<String>) -> Self {
		let mut values = HashMap::new();
		values.insert(key.into(), value.into());
		Self { values }
	}
}

impl CustomizationStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.values.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
		self.values.insert(key.to_owned(), value);
		Ok(())
	}

	fn remove(&mut self, key: &str) -> Result<(), StoreError> {
		self.values.remove(key);
		Ok(())
	}
}

/// Store backed by a single JSON object on disk.
///
/// A missing file reads as an empty store. Every write rewrites the file.
#[derive(Debug, Clone)]
pub struct FileStore {
	path: PathBuf,
}

impl FileStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Opens the store at [`FileStore::default_path`].
	pub fn open_default() -> Option<Self> {
		Self::default_path().map(Self::new)
	}

	/// `$XDG_DATA_HOME/storyline/customization.json` or the platform equivalent.
	pub fn default_path() -> Option<PathBuf> {
		dirs::data_dir().map(|dir| dir.join("storyline").join("customization.json"))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
		let content = match std::fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				return Ok(BTreeMap::new());
			}
			Err(error) => {
				return Err(StoreError::Io {
					path: self.path.clone(),
					error,
				});
			}
		};
		serde_json::from_str(&content).map_err(|error| StoreError::Format {
			path: self.path.clone(),
			error,
		})
	}

	fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
		let io_err = |error| StoreError::Io {
			path: self.path.clone(),
			error,
		};
		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent).map_err(io_err)?;
		}
		let content = serde_json::to_string_pretty(values).map_err(|error| StoreError::Format {
			path: self.path.clone(),
			error,
		})?;
		std::fs::write(&self.path, content).map_err(io_err)
	}
}

impl CustomizationStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.read_all()?.remove(key))
	}

	fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
		let mut values = self.read_all()?;
		values.insert(key.to_owned(), value);
		self.write_all(&values)
	}

	fn remove(&mut self, key: &str) -> Result<(), StoreError> {
		let mut values = self.read_all()?;
		if values.remove(key).is_some() {
			self.write_all(&values)?;
		}
		Ok(())
	}
}
