//! Boundary to the external text widget and the node it is mounted on.
//!
//! The viewer never renders, tokenizes or folds text itself. It hands an
//! opaque [`WidgetOptions`] bag to a [`WidgetFactory`] and afterwards only
//! pushes new content through [`TextWidget::set_value`].

use std::collections::BTreeMap;
use std::fmt;

use resview_primitives::{Position, Token};

use crate::overlay::RenderTarget;
use crate::settings::FoldGutterSettings;

/// Construction-time widget configuration.
///
/// Values are passed through unmodified; the viewer does not interpret them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
	/// Initial content.
	pub value: String,
	pub read_only: bool,
	pub theme: String,
	pub mode: String,
	pub keymap: String,
	pub line_wrapping: bool,
	pub fold_gutter: FoldGutterSettings,
	pub gutters: Vec<String>,
	pub extra_keys: BTreeMap<String, String>,
	/// Whether the widget should raise hover-info lookups.
	pub hover_info: bool,
}

/// A constructed text widget owned by a mounted viewer.
pub trait TextWidget {
	/// Replaces the displayed content.
	fn set_value(&mut self, text: &str);

	/// Returns the displayed content.
	fn value(&self) -> String;

	/// Recomputes the widget's layout after its container changed size.
	fn refresh(&mut self) {}
}

/// The host-supplied element a widget is bound to.
pub trait MountNode {
	/// Rendered height of the element.
	fn client_height(&self) -> u32;

	fn set_attribute(&mut self, name: &str, value: &str);
}

/// Constructs widgets bound to mount nodes.
pub trait WidgetFactory {
	type Node: MountNode;
	type Widget: TextWidget;

	/// Builds a widget bound to `node`.
	///
	/// `hover` is present exactly when `options.hover_info` is set. The widget
	/// calls it with the token under the cursor and the cursor position and
	/// displays the returned target, if any.
	fn construct(&mut self, node: &Self::Node, options: WidgetOptions, hover: Option<HoverInfoHandler>) -> Self::Widget;
}

/// Per-instance hover-info lookup handed to a widget at construction.
pub struct HoverInfoHandler {
	lookup: Box<dyn Fn(&Token, Position) -> Option<RenderTarget>>,
}

impl HoverInfoHandler {
	pub fn new(lookup: impl Fn(&Token, Position) -> Option<RenderTarget> + 'static) -> Self {
		Self { lookup: Box::new(lookup) }
	}

	/// Resolves overlay content for a hover. `None` means "show nothing".
	pub fn lookup(&self, token: &Token, pos: Position) -> Option<RenderTarget> {
		(self.lookup)(token, pos)
	}
}

impl fmt::Debug for HoverInfoHandler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HoverInfoHandler").finish_non_exhaustive()
	}
}
