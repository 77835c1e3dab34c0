//! Hover overlays composited from pluggable providers.
//!
//! Two independent provider capabilities exist:
//! - [`PositionOverlayProvider`]: always applicable, keyed by cursor position.
//! - [`TokenOverlayProvider`]: keyed by the token under the cursor, and only
//!   rendered when it reports that it applies.
//!
//! The [`OverlayHost`] queries them in that fixed order for every hover and
//! renders the result into a single persistent [`RenderTarget`].

use std::fmt;
use std::rc::Rc;

use resview_primitives::{Fragment, Position, Token};
use smallvec::SmallVec;

use crate::error::ProviderError;

pub mod host;

pub use host::{OverlayHost, RenderTarget};

/// Overlay content keyed by cursor position.
pub trait PositionOverlayProvider {
	fn render(&self, pos: Position) -> Result<Fragment, ProviderError>;
}

/// Overlay content keyed by the token under the cursor.
pub trait TokenOverlayProvider {
	/// Returns true if this provider has something to show for `token`.
	fn should_apply(&self, token: &Token) -> bool;

	/// Renders content for `token`. Only called after `should_apply` accepted it.
	fn render(&self, token: &Token) -> Result<Fragment, ProviderError>;
}

/// The providers a viewer was mounted with.
#[derive(Clone, Default)]
pub struct OverlayProviders {
	pub tooltip: Option<Rc<dyn PositionOverlayProvider>>,
	pub preview: Option<Rc<dyn TokenOverlayProvider>>,
}

impl OverlayProviders {
	pub fn is_empty(&self) -> bool {
		self.tooltip.is_none() && self.preview.is_none()
	}
}

impl fmt::Debug for OverlayProviders {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OverlayProviders")
			.field("tooltip", &self.tooltip.is_some())
			.field("preview", &self.preview.is_some())
			.finish()
	}
}

/// Which provider produced an overlay entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
	Tooltip,
	Preview,
}

impl ProviderKind {
	pub fn name(self) -> &'static str {
		match self {
			Self::Tooltip => "tooltip",
			Self::Preview => "preview",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayEntry {
	pub source: ProviderKind,
	pub fragment: Fragment,
}

/// Ordered fragments for one hover query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayComposite {
	entries: SmallVec<[OverlayEntry; 2]>,
}

impl OverlayComposite {
	pub fn push(&mut self, source: ProviderKind, fragment: Fragment) {
		self.entries.push(OverlayEntry { source, fragment });
	}

	pub fn entries(&self) -> &[OverlayEntry] {
		&self.entries
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns the sources of all entries, in display order.
	pub fn sources(&self) -> impl Iterator<Item = ProviderKind> + '_ {
		self.entries.iter().map(|entry| entry.source)
	}
}

impl fmt::Display for OverlayComposite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				f.write_str("\n\n")?;
			}
			write!(f, "{}", entry.fragment)?;
		}
		Ok(())
	}
}
