//! Recording doubles for the widget boundary and overlay providers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use resview_primitives::{Fragment, Position, Token};

use crate::error::ProviderError;
use crate::overlay::{PositionOverlayProvider, RenderTarget, TokenOverlayProvider};
use crate::widget::{HoverInfoHandler, MountNode, TextWidget, WidgetFactory, WidgetOptions};

#[derive(Debug, Default, Clone)]
pub struct RecordingNode {
	pub height: u32,
	pub attributes: Vec<(String, String)>,
}

impl RecordingNode {
	pub fn with_height(height: u32) -> Self {
		Self {
			height,
			..Self::default()
		}
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.iter().rev().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
	}
}

impl MountNode for RecordingNode {
	fn client_height(&self) -> u32 {
		self.height
	}

	fn set_attribute(&mut self, name: &str, value: &str) {
		self.attributes.push((name.to_string(), value.to_string()));
	}
}

/// Counters shared between a widget and the test that mounted it, so they
/// stay readable after the widget is dropped.
#[derive(Debug, Default)]
pub struct WidgetLog {
	pub set_value_calls: Cell<usize>,
	pub refreshes: Cell<usize>,
	pub dropped: Cell<bool>,
}

#[derive(Debug)]
pub struct RecordingWidget {
	pub options: WidgetOptions,
	pub value: String,
	pub hover: Option<HoverInfoHandler>,
	pub log: Rc<WidgetLog>,
}

impl RecordingWidget {
	pub fn hover(&self, token: &Token, pos: Position) -> Option<RenderTarget> {
		self.hover.as_ref()?.lookup(token, pos)
	}
}

impl TextWidget for RecordingWidget {
	fn set_value(&mut self, text: &str) {
		self.log.set_value_calls.set(self.log.set_value_calls.get() + 1);
		self.value = text.to_string();
	}

	fn value(&self) -> String {
		self.value.clone()
	}

	fn refresh(&mut self) {
		self.log.refreshes.set(self.log.refreshes.get() + 1);
	}
}

impl Drop for RecordingWidget {
	fn drop(&mut self) {
		self.log.dropped.set(true);
	}
}

#[derive(Debug, Default)]
pub struct RecordingFactory {
	pub constructed: usize,
	pub log: Rc<WidgetLog>,
}

impl WidgetFactory for RecordingFactory {
	type Node = RecordingNode;
	type Widget = RecordingWidget;

	fn construct(&mut self, _node: &RecordingNode, options: WidgetOptions, hover: Option<HoverInfoHandler>) -> RecordingWidget {
		self.constructed += 1;
		self.log = Rc::new(WidgetLog::default());
		RecordingWidget {
			value: options.value.clone(),
			options,
			hover,
			log: Rc::clone(&self.log),
		}
	}
}

/// Tooltip that echoes the hovered position.
#[derive(Debug, Default)]
pub struct EchoTooltip {
	pub calls: Cell<usize>,
}

impl PositionOverlayProvider for EchoTooltip {
	fn render(&self, pos: Position) -> Result<Fragment, ProviderError> {
		self.calls.set(self.calls.get() + 1);
		Ok(Fragment::text(format!("at {pos}")))
	}
}

/// Tooltip that always fails.
#[derive(Debug, Default)]
pub struct BrokenTooltip;

impl PositionOverlayProvider for BrokenTooltip {
	fn render(&self, _pos: Position) -> Result<Fragment, ProviderError> {
		Err(ProviderError::Render("tooltip backend unavailable".to_string()))
	}
}

/// Preview that applies to tokens whose unquoted text ends with `suffix`.
#[derive(Debug)]
pub struct SuffixPreview {
	pub suffix: &'static str,
	pub fail: bool,
	pub checked: RefCell<Vec<String>>,
	pub rendered: RefCell<Vec<String>>,
}

impl SuffixPreview {
	pub fn new(suffix: &'static str) -> Self {
		Self {
			suffix,
			fail: false,
			checked: RefCell::default(),
			rendered: RefCell::default(),
		}
	}

	pub fn failing(suffix: &'static str) -> Self {
		Self {
			fail: true,
			..Self::new(suffix)
		}
	}
}

impl TokenOverlayProvider for SuffixPreview {
	fn should_apply(&self, token: &Token) -> bool {
		self.checked.borrow_mut().push(token.text.clone());
		token.unquoted().ends_with(self.suffix)
	}

	fn render(&self, token: &Token) -> Result<Fragment, ProviderError> {
		self.rendered.borrow_mut().push(token.text.clone());
		if self.fail {
			return Err(ProviderError::NoContent(token.text.clone()));
		}
		Ok(Fragment::image(token.unquoted()))
	}
}
