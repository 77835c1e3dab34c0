//! Viewer settings loaded from TOML.
//!
//! Every key is optional; missing keys fall back to the defaults the result
//! panel ships with:
//!
//! ```toml
//! theme = "graphiql"
//! mode = "graphql-results"
//! keymap = "sublime"
//! line-wrapping = true
//! gutters = ["fold-gutter"]
//!
//! [fold-gutter]
//! min-fold-size = 4
//!
//! [extra-keys]
//! "Ctrl-F" = "findPersistent"
//! ```
//!
//! An `[extra-keys]` table replaces the default key table as a whole.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SettingsError};
use crate::widget::WidgetOptions;

pub const DEFAULT_THEME: &str = "graphiql";
pub const DEFAULT_MODE: &str = "graphql-results";
pub const DEFAULT_KEYMAP: &str = "sublime";
pub const FOLD_GUTTER: &str = "fold-gutter";

/// Widget configuration shared by every viewer a host mounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ViewerSettings {
	/// Theme used when a config does not name one.
	pub theme: String,
	/// Language mode handed to the widget's tokenizer.
	pub mode: String,
	pub keymap: String,
	pub line_wrapping: bool,
	pub fold_gutter: FoldGutterSettings,
	pub gutters: Vec<String>,
	/// Key chord to widget command.
	pub extra_keys: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FoldGutterSettings {
	/// Smallest region, in lines, that gets a fold marker.
	pub min_fold_size: u32,
}

impl Default for FoldGutterSettings {
	fn default() -> Self {
		Self { min_fold_size: 4 }
	}
}

impl Default for ViewerSettings {
	fn default() -> Self {
		Self {
			theme: DEFAULT_THEME.to_string(),
			mode: DEFAULT_MODE.to_string(),
			keymap: DEFAULT_KEYMAP.to_string(),
			line_wrapping: true,
			fold_gutter: FoldGutterSettings::default(),
			gutters: vec![FOLD_GUTTER.to_string()],
			extra_keys: default_extra_keys(),
		}
	}
}

/// Search and sub-word navigation chords available in every result panel.
pub fn default_extra_keys() -> BTreeMap<String, String> {
	let find = if cfg!(target_os = "macos") { "Cmd-F" } else { "Ctrl-F" };
	[
		(find, "findPersistent"),
		("Cmd-G", "findPersistent"),
		("Ctrl-G", "findPersistent"),
		("Ctrl-Left", "goSubwordLeft"),
		("Ctrl-Right", "goSubwordRight"),
		("Alt-Left", "goGroupLeft"),
		("Alt-Right", "goGroupRight"),
	]
	.into_iter()
	.map(|(key, command)| (key.to_string(), command.to_string()))
	.collect()
}

impl ViewerSettings {
	/// Parses and validates settings from a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads and parses a settings file.
	pub fn load(path: &Path) -> Result<Self> {
		let source = std::fs::read_to_string(path).map_err(|error| SettingsError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), theme = %settings.theme, "Loaded viewer settings");
		Ok(settings)
	}

	pub fn validate(&self) -> Result<()> {
		if self.theme.trim().is_empty() {
			return Err(SettingsError::Invalid {
				key: "theme",
				reason: "must not be empty".to_string(),
			});
		}
		if self.fold_gutter.min_fold_size == 0 {
			return Err(SettingsError::Invalid {
				key: "fold-gutter.min-fold-size",
				reason: "must be at least 1".to_string(),
			});
		}
		Ok(())
	}

	/// Builds the construction options for a new widget.
	///
	/// `theme` overrides the configured theme when present; `hover_info`
	/// enables the widget's hover lookup feature.
	pub fn widget_options(&self, value: &str, theme: Option<&str>, hover_info: bool) -> WidgetOptions {
		WidgetOptions {
			value: value.to_string(),
			read_only: true,
			theme: theme.unwrap_or(&self.theme).to_string(),
			mode: self.mode.clone(),
			keymap: self.keymap.clone(),
			line_wrapping: self.line_wrapping,
			fold_gutter: self.fold_gutter,
			gutters: self.gutters.clone(),
			extra_keys: self.extra_keys.clone(),
			hover_info,
		}
	}
}
