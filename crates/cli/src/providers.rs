//! Overlay providers the command line mounts its viewer with.

use resview_primitives::{Fragment, Position, Token, TokenKind};
use resview_viewer::{PositionOverlayProvider, ProviderError, TokenOverlayProvider};

const IMAGE_EXTENSIONS: [&str; 6] = ["bmp", "gif", "jpeg", "jpg", "png", "svg"];

/// Shows the 1-based cursor location.
pub struct LocationTooltip;

impl PositionOverlayProvider for LocationTooltip {
	fn render(&self, pos: Position) -> Result<Fragment, ProviderError> {
		Ok(Fragment::text(format!("line {}, column {}", pos.line + 1, pos.ch + 1)))
	}
}

/// Previews string values that point at images.
pub struct ImageUrlPreview;

impl ImageUrlPreview {
	fn image_url(token: &Token) -> Option<&str> {
		if token.kind != TokenKind::String {
			return None;
		}
		let url = token.unquoted().trim();
		is_image_path(url).then_some(url)
	}
}

/// Returns true if the path part of `url` ends in a known image extension.
fn is_image_path(url: &str) -> bool {
	let path = url.split(['?', '#']).next().unwrap_or_default();
	let Some((stem, ext)) = path.rsplit_once('.') else {
		return false;
	};
	!stem.is_empty() && IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known))
}

impl TokenOverlayProvider for ImageUrlPreview {
	fn should_apply(&self, token: &Token) -> bool {
		Self::image_url(token).is_some()
	}

	fn render(&self, token: &Token) -> Result<Fragment, ProviderError> {
		Self::image_url(token)
			.map(Fragment::image)
			.ok_or_else(|| ProviderError::NoContent(token.text.clone()))
	}
}
