use std::fmt;
use std::rc::Rc;

use crate::overlay::{OverlayProviders, PositionOverlayProvider, TokenOverlayProvider};

/// Callback receiving the mount node once it exists.
pub type MountNodeCallback<N> = Box<dyn FnOnce(&N)>;

/// Host-supplied configuration for one render of a viewer.
///
/// Only `display_text` is read after mount; theme and providers are fixed
/// when the widget is constructed.
pub struct ViewerConfig<N> {
	pub display_text: String,
	/// Overrides the settings theme when present.
	pub theme_name: Option<String>,
	pub tooltip_provider: Option<Rc<dyn PositionOverlayProvider>>,
	pub preview_provider: Option<Rc<dyn TokenOverlayProvider>>,
	pub on_mount_node: Option<MountNodeCallback<N>>,
}

impl<N> ViewerConfig<N> {
	pub fn new(display_text: impl Into<String>) -> Self {
		Self {
			display_text: display_text.into(),
			theme_name: None,
			tooltip_provider: None,
			preview_provider: None,
			on_mount_node: None,
		}
	}

	pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
		self.theme_name = Some(theme.into());
		self
	}

	pub fn with_tooltip(mut self, provider: Rc<dyn PositionOverlayProvider>) -> Self {
		self.tooltip_provider = Some(provider);
		self
	}

	pub fn with_preview(mut self, provider: Rc<dyn TokenOverlayProvider>) -> Self {
		self.preview_provider = Some(provider);
		self
	}

	pub fn on_mount_node(mut self, callback: impl FnOnce(&N) + 'static) -> Self {
		self.on_mount_node = Some(Box::new(callback));
		self
	}

	pub fn providers(&self) -> OverlayProviders {
		OverlayProviders {
			tooltip: self.tooltip_provider.clone(),
			preview: self.preview_provider.clone(),
		}
	}
}

impl<N> fmt::Debug for ViewerConfig<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ViewerConfig")
			.field("display_text", &self.display_text)
			.field("theme_name", &self.theme_name)
			.field("tooltip_provider", &self.tooltip_provider.is_some())
			.field("preview_provider", &self.preview_provider.is_some())
			.field("on_mount_node", &self.on_mount_node.is_some())
			.finish()
	}
}
