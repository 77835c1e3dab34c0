use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use resview_primitives::{Position, Token};

use super::{OverlayComposite, OverlayProviders, ProviderKind};
use crate::widget::HoverInfoHandler;

/// The single persistent surface overlays are rendered into.
///
/// Clones share the same surface. Widgets receive a clone from the hover
/// handler and can only read it; rendering and clearing belong to the
/// [`OverlayHost`] that created it.
#[derive(Clone, Default)]
pub struct RenderTarget {
	state: Rc<RefCell<TargetState>>,
}

#[derive(Debug, Default)]
struct TargetState {
	composite: Option<OverlayComposite>,
	renders: u64,
}

impl RenderTarget {
	/// Returns the currently rendered composite, or `None` if cleared.
	pub fn composite(&self) -> Option<OverlayComposite> {
		self.state.borrow().composite.clone()
	}

	pub fn is_cleared(&self) -> bool {
		self.state.borrow().composite.is_none()
	}

	/// Number of times content has been rendered into this target.
	pub fn render_count(&self) -> u64 {
		self.state.borrow().renders
	}

	/// Returns true if both handles refer to the same surface.
	pub fn is_same(&self, other: &RenderTarget) -> bool {
		Rc::ptr_eq(&self.state, &other.state)
	}

	fn render(&self, composite: OverlayComposite) {
		let mut state = self.state.borrow_mut();
		state.composite = Some(composite);
		state.renders += 1;
	}

	fn clear(&self) {
		self.state.borrow_mut().composite = None;
	}
}

impl fmt::Debug for RenderTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("RenderTarget")
			.field("composite", &state.composite)
			.field("renders", &state.renders)
			.finish()
	}
}

/// Composites provider output into one [`RenderTarget`] per mounted viewer.
///
/// A host starts attached. Once [`detach`](Self::detach)ed it clears its
/// target and answers every later lookup with "no info", so a hover handler
/// that outlives its viewer's mount cannot render anything.
#[derive(Debug)]
pub struct OverlayHost {
	providers: OverlayProviders,
	target: RenderTarget,
	attached: Cell<bool>,
}

impl OverlayHost {
	pub fn new(providers: OverlayProviders) -> Self {
		Self {
			providers,
			target: RenderTarget::default(),
			attached: Cell::new(true),
		}
	}

	/// Collects fragments for a hover without touching the render target.
	///
	/// The tooltip provider is consulted first, then the preview provider if
	/// it applies to `token`. A provider that fails to render is logged and
	/// skipped.
	pub fn compose(&self, token: &Token, pos: Position) -> OverlayComposite {
		let mut composite = OverlayComposite::default();

		if let Some(tooltip) = &self.providers.tooltip {
			match tooltip.render(pos) {
				Ok(fragment) => composite.push(ProviderKind::Tooltip, fragment),
				Err(e) => tracing::warn!(provider = ProviderKind::Tooltip.name(), %pos, error = %e, "Overlay provider failed"),
			}
		}

		if let Some(preview) = &self.providers.preview
			&& preview.should_apply(token)
		{
			match preview.render(token) {
				Ok(fragment) => composite.push(ProviderKind::Preview, fragment),
				Err(e) => {
					tracing::warn!(provider = ProviderKind::Preview.name(), token = %token.text, error = %e, "Overlay provider failed")
				}
			}
		}

		composite
	}

	/// Answers a widget hover-info request.
	///
	/// Renders the composite into the persistent target and returns it, or
	/// clears the target and returns `None` when nothing applies.
	pub fn lookup(&self, token: &Token, pos: Position) -> Option<RenderTarget> {
		if !self.attached.get() {
			tracing::trace!(%pos, "Ignoring hover on detached overlay host");
			return None;
		}

		let composite = self.compose(token, pos);
		if composite.is_empty() {
			self.target.clear();
			return None;
		}

		tracing::trace!(%pos, entries = composite.len(), "Rendering hover overlay");
		self.target.render(composite);
		Some(self.target.clone())
	}

	pub fn target(&self) -> &RenderTarget {
		&self.target
	}

	pub fn is_attached(&self) -> bool {
		self.attached.get()
	}

	/// Clears the target and stops answering lookups.
	pub fn detach(&self) {
		self.attached.set(false);
		self.target.clear();
	}

	/// Wraps a shared host as the per-instance widget hover handler.
	pub fn handler(self: &Rc<Self>) -> HoverInfoHandler {
		let host = Rc::clone(self);
		HoverInfoHandler::new(move |token, pos| host.lookup(token, pos))
	}
}
