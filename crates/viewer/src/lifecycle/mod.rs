//! Mount lifecycle of a result viewer.
//!
//! A [`ResultViewer`] is either unmounted or owns exactly one live widget and
//! the node it is bound to:
//!
//! ```text
//!   Unmounted --mount--> Mounted --update*--> Mounted --unmount--> Unmounted
//! ```
//!
//! Mounting twice is rejected; updating or unmounting while unmounted is a
//! no-op. Theme and overlay providers are taken from the config passed to
//! `mount`; changing them requires unmounting and mounting again.

use std::rc::Rc;

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::gate::should_update;
use crate::overlay::{OverlayHost, RenderTarget};
use crate::settings::ViewerSettings;
use crate::widget::{MountNode, TextWidget, WidgetFactory};

/// Attributes applied to every mount node, labelling it as a live result region.
pub const MOUNT_ATTRIBUTES: [(&str, &str); 4] = [
	("class", "result-window"),
	("aria-label", "Result Window"),
	("aria-live", "polite"),
	("aria-atomic", "true"),
];

/// Result of [`ResultViewer::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
	/// The new text was pushed into the widget.
	Applied,
	/// The text matched what is displayed; the widget was not touched.
	Unchanged,
	/// No widget is mounted.
	NotMounted,
}

struct MountedViewer<F: WidgetFactory> {
	widget: F::Widget,
	node: F::Node,
	overlay: Option<Rc<OverlayHost>>,
	config: ViewerConfig<F::Node>,
}

enum Lifecycle<F: WidgetFactory> {
	Unmounted,
	Mounted(MountedViewer<F>),
}

/// Owns one external widget instance for a read-only result panel.
pub struct ResultViewer<F: WidgetFactory> {
	factory: F,
	settings: ViewerSettings,
	state: Lifecycle<F>,
}

impl<F: WidgetFactory> ResultViewer<F> {
	pub fn new(factory: F) -> Self {
		Self::with_settings(factory, ViewerSettings::default())
	}

	pub fn with_settings(factory: F, settings: ViewerSettings) -> Self {
		Self {
			factory,
			settings,
			state: Lifecycle::Unmounted,
		}
	}

	/// Constructs the widget on `node` and starts displaying `config.display_text`.
	///
	/// The node is labelled and handed to `config.on_mount_node` before the
	/// widget is built. A hover handler is registered only if the config
	/// carries at least one overlay provider.
	///
	/// # Errors
	///
	/// - [`ViewerError::AlreadyMounted`] if a widget is live; it is left untouched.
	/// - [`ViewerError::MissingMountNode`] if `node` is `None`; nothing is constructed.
	pub fn mount(&mut self, mut config: ViewerConfig<F::Node>, node: Option<F::Node>) -> Result<(), ViewerError> {
		if self.is_mounted() {
			return Err(ViewerError::AlreadyMounted);
		}
		let Some(mut node) = node else {
			tracing::error!("Result viewer mounted without a mount node");
			return Err(ViewerError::MissingMountNode);
		};

		for (name, value) in MOUNT_ATTRIBUTES {
			node.set_attribute(name, value);
		}
		if let Some(on_mount_node) = config.on_mount_node.take() {
			on_mount_node(&node);
		}

		let providers = config.providers();
		let overlay = (!providers.is_empty()).then(|| Rc::new(OverlayHost::new(providers)));
		let options = self
			.settings
			.widget_options(&config.display_text, config.theme_name.as_deref(), overlay.is_some());

		tracing::trace!(
			theme = %options.theme,
			hover_info = options.hover_info,
			len = config.display_text.len(),
			"Mounting result viewer"
		);

		let widget = self.factory.construct(&node, options, overlay.as_ref().map(OverlayHost::handler));
		self.state = Lifecycle::Mounted(MountedViewer {
			widget,
			node,
			overlay,
			config,
		});
		Ok(())
	}

	/// Pushes `next.display_text` into the widget if it differs from what is shown.
	///
	/// Everything else in `next` is ignored.
	pub fn update(&mut self, next: ViewerConfig<F::Node>) -> UpdateOutcome {
		let Lifecycle::Mounted(mounted) = &mut self.state else {
			tracing::trace!("Ignoring update on unmounted result viewer");
			return UpdateOutcome::NotMounted;
		};

		if !should_update(&mounted.config, &next) {
			tracing::trace!(outcome = ?UpdateOutcome::Unchanged, "Result viewer update");
			return UpdateOutcome::Unchanged;
		}
		if next.theme_name.is_some() && next.theme_name != mounted.config.theme_name {
			tracing::debug!(theme = ?next.theme_name, "Theme changes after mount are ignored");
		}

		mounted.widget.set_value(&next.display_text);
		mounted.config.display_text = next.display_text;
		tracing::trace!(outcome = ?UpdateOutcome::Applied, len = mounted.config.display_text.len(), "Result viewer update");
		UpdateOutcome::Applied
	}

	/// Releases the widget and mount node.
	///
	/// The widget's own teardown happens in its `Drop`. Returns false if
	/// nothing was mounted.
	pub fn unmount(&mut self) -> bool {
		let Lifecycle::Mounted(mounted) = std::mem::replace(&mut self.state, Lifecycle::Unmounted) else {
			return false;
		};
		if let Some(overlay) = &mounted.overlay {
			overlay.detach();
		}
		tracing::trace!("Unmounted result viewer");
		true
	}

	pub fn is_mounted(&self) -> bool {
		matches!(self.state, Lifecycle::Mounted(_))
	}

	/// Read-only access to the live widget, e.g. for selection or scroll queries.
	pub fn handle(&self) -> Option<&F::Widget> {
		self.mounted().map(|mounted| &mounted.widget)
	}

	/// Rendered height of the mount node, or `None` when unmounted.
	pub fn mounted_height(&self) -> Option<u32> {
		self.mounted().map(|mounted| mounted.node.client_height())
	}

	/// The overlay render target, if the viewer was mounted with providers.
	pub fn overlay_target(&self) -> Option<&RenderTarget> {
		self.mounted()?.overlay.as_deref().map(OverlayHost::target)
	}

	/// Text most recently pushed into the widget.
	pub fn display_text(&self) -> Option<&str> {
		self.mounted().map(|mounted| mounted.config.display_text.as_str())
	}

	/// Asks the widget to recompute its layout. No-op when unmounted.
	pub fn refresh_layout(&mut self) {
		if let Lifecycle::Mounted(mounted) = &mut self.state {
			mounted.widget.refresh();
		}
	}

	pub fn settings(&self) -> &ViewerSettings {
		&self.settings
	}

	pub fn factory(&self) -> &F {
		&self.factory
	}

	fn mounted(&self) -> Option<&MountedViewer<F>> {
		match &self.state {
			Lifecycle::Mounted(mounted) => Some(mounted),
			Lifecycle::Unmounted => None,
		}
	}
}
