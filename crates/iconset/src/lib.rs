//! Type registries backing the domain-story palette.
//!
//! An [`Iconset`] owns two ordered registries, one per [`ElementKind`]. Each
//! registry maps a namespaced type id (`domainStory:Actor1`) to a
//! [`TypeEntry`] carrying its display name and icon reference.
//!
//! # Lifecycle
//!
//! 1. [`IconsetConfig`] is read once at startup (JSON or TOML).
//! 2. [`Iconset::from_config`] populates both registries in declaration order.
//! 3. An optional [`OverridePayload`] rebinds icons of types that already exist.
//!
//! Entries are never removed afterwards, and iteration order is the order in
//! which the palette shows them.

pub mod config;
pub mod entry;
pub mod error;
pub mod iconset;
pub mod kind;
pub mod naming;
pub mod overrides;
pub mod registry;

pub use config::{ConfigWarning, IconsetConfig, TypeSection};
pub use entry::TypeEntry;
pub use error::{IconsetError, Result};
pub use iconset::Iconset;
pub use kind::ElementKind;
pub use naming::{GROUP_TYPE, NAMESPACE, icon_class_for_type, name_from_type};
pub use overrides::{OverrideOutcome, OverridePayload};
pub use registry::TypeRegistry;
