//! Headless implementation of the result viewer's widget boundary.
//!
//! [`HeadlessFactory`] builds [`HeadlessWidget`]s that keep their text in a
//! rope and resolve hovers with the line scanner in [`scan`]. Nothing is drawn;
//! the widget exists so viewers can be driven from tests and the command line.

pub mod scan;

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use resview_primitives::{Position, Token};
use resview_viewer::{HoverInfoHandler, MountNode, RenderTarget, TextWidget, WidgetFactory, WidgetOptions};
use ropey::Rope;

/// Mount node with attributes and a host-controlled height.
///
/// Clones share the height, so a host can keep a clone and resize the node
/// after handing it to a viewer.
#[derive(Debug, Clone, Default)]
pub struct HeadlessNode {
	attributes: BTreeMap<String, String>,
	height: Rc<Cell<u32>>,
}

impl HeadlessNode {
	pub fn new(height: u32) -> Self {
		Self {
			attributes: BTreeMap::new(),
			height: Rc::new(Cell::new(height)),
		}
	}

	pub fn set_height(&self, height: u32) {
		self.height.set(height);
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}
}

impl MountNode for HeadlessNode {
	fn client_height(&self) -> u32 {
		self.height.get()
	}

	fn set_attribute(&mut self, name: &str, value: &str) {
		self.attributes.insert(name.to_string(), value.to_string());
	}
}

#[derive(Debug)]
pub struct HeadlessWidget {
	text: Rope,
	options: WidgetOptions,
	hover: Option<HoverInfoHandler>,
	set_value_calls: usize,
	refreshes: usize,
}

impl HeadlessWidget {
	pub fn options(&self) -> &WidgetOptions {
		&self.options
	}

	pub fn line_count(&self) -> usize {
		self.text.len_lines()
	}

	/// Text of line `line` without its line break.
	pub fn line(&self, line: usize) -> Option<String> {
		if line >= self.text.len_lines() {
			return None;
		}
		let text = self.text.line(line).to_string();
		Some(text.trim_end_matches(['\n', '\r']).to_string())
	}

	/// Token under `pos`, or `None` past the end of the text.
	pub fn token_at(&self, pos: Position) -> Option<Token> {
		scan::token_at(&self.line(pos.line as usize)?, pos.ch)
	}

	/// Simulates the pointer resting at `pos`.
	///
	/// Returns the overlay target to display, or `None` if hover info is
	/// disabled, nothing is under the cursor, or no provider applies.
	pub fn hover_at(&self, pos: Position) -> Option<RenderTarget> {
		let token = self.token_at(pos)?;
		self.hover_token(&token, pos)
	}

	/// Raises a hover-info request for an already resolved token.
	pub fn hover_token(&self, token: &Token, pos: Position) -> Option<RenderTarget> {
		let handler = self.hover.as_ref().filter(|_| self.options.hover_info)?;
		tracing::trace!(%pos, token = %token.text, "Headless hover");
		handler.lookup(token, pos)
	}

	/// Number of times the content was replaced after construction.
	pub fn set_value_calls(&self) -> usize {
		self.set_value_calls
	}

	pub fn refreshes(&self) -> usize {
		self.refreshes
	}
}

impl TextWidget for HeadlessWidget {
	fn set_value(&mut self, text: &str) {
		self.text = Rope::from_str(text);
		self.set_value_calls += 1;
	}

	fn value(&self) -> String {
		self.text.to_string()
	}

	fn refresh(&mut self) {
		self.refreshes += 1;
	}
}

#[derive(Debug, Default)]
pub struct HeadlessFactory {
	constructed: usize,
}

impl HeadlessFactory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of widgets built so far.
	pub fn constructed(&self) -> usize {
		self.constructed
	}
}

impl WidgetFactory for HeadlessFactory {
	type Node = HeadlessNode;
	type Widget = HeadlessWidget;

	fn construct(&mut self, node: &HeadlessNode, options: WidgetOptions, hover: Option<HoverInfoHandler>) -> HeadlessWidget {
		self.constructed += 1;
		tracing::debug!(height = node.client_height(), theme = %options.theme, "Constructing headless widget");
		HeadlessWidget {
			text: Rope::from_str(&options.value),
			options,
			hover,
			set_value_calls: 0,
			refreshes: 0,
		}
	}
}
