use std::fmt;

/// A piece of overlay content produced by a single provider.
///
/// Fragments are plain data; how they are drawn is up to the widget that
/// displays the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
	/// Preformatted text, one entry per displayed line.
	Text(Vec<String>),
	/// An image reference, typically rendered as a thumbnail.
	Image {
		src: String,
		width: Option<u32>,
		height: Option<u32>,
	},
}

impl Fragment {
	/// Builds a text fragment, splitting `content` on line breaks.
	pub fn text(content: impl AsRef<str>) -> Self {
		Self::Text(content.as_ref().lines().map(str::to_owned).collect())
	}

	pub fn image(src: impl Into<String>) -> Self {
		Self::Image {
			src: src.into(),
			width: None,
			height: None,
		}
	}
}

impl fmt::Display for Fragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(lines) => f.write_str(&lines.join("\n")),
			Self::Image {
				src,
				width: Some(w),
				height: Some(h),
			} => write!(f, "[image {src} {w}x{h}]"),
			Self::Image { src, .. } => write!(f, "[image {src}]"),
		}
	}
}
