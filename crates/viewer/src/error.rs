//! Error types for the viewer lifecycle, overlay providers and settings.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by [`ResultViewer`](crate::ResultViewer) lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
	/// `mount` was called without a mount node. This is a host bug; no widget
	/// is constructed and no overlay handler is registered.
	#[error("cannot mount viewer: mount node is absent")]
	MissingMountNode,
	/// `mount` was called while a widget is already live.
	#[error("viewer is already mounted")]
	AlreadyMounted,
}

/// Failure reported by an overlay provider while rendering.
///
/// The overlay host isolates these per provider: a failing provider only loses
/// its own fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
	/// The provider had nothing meaningful to show for this query.
	#[error("no overlay content for {0:?}")]
	NoContent(String),
	/// Rendering failed outright.
	#[error("overlay render failed: {0}")]
	Render(String),
}

/// Errors that can occur when loading [`ViewerSettings`](crate::ViewerSettings).
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
	#[error("failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("invalid setting {key}: {reason}")]
	Invalid { key: &'static str, reason: String },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
