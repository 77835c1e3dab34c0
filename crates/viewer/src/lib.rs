//! Read-only result viewer.
//!
//! This crate owns the control logic around an external text widget used to
//! display formatted output in one panel of a host application:
//!
//! - [`ResultViewer`]: mount lifecycle of exactly one widget instance.
//! - [`gate::should_update`]: skips widget resyncs when the text is unchanged.
//! - [`overlay`]: hover overlays composited from tooltip and preview providers.
//! - [`sizing`]: rendered-height reporting for the host's sizing manager.
//!
//! Rendering, tokenizing, folding and search all belong to the widget, which
//! is reached only through the traits in [`widget`].

pub mod config;
pub mod error;
pub mod gate;
pub mod lifecycle;
pub mod overlay;
pub mod settings;
pub mod sizing;
pub mod widget;

#[cfg(test)]
mod test_support;

pub use config::{MountNodeCallback, ViewerConfig};
pub use error::{ProviderError, SettingsError, ViewerError};
pub use lifecycle::{MOUNT_ATTRIBUTES, ResultViewer, UpdateOutcome};
pub use overlay::{
	OverlayComposite, OverlayEntry, OverlayHost, OverlayProviders, PositionOverlayProvider,
	ProviderKind, RenderTarget, TokenOverlayProvider,
};
pub use resview_primitives::{Fragment, Position, Token, TokenKind};
pub use settings::ViewerSettings;
pub use sizing::{HeightTracker, SizedPanel};
pub use widget::{HoverInfoHandler, MountNode, TextWidget, WidgetFactory, WidgetOptions};
