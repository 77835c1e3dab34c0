/// Lexical class of a token, as reported by the widget's tokenizer.
///
/// The viewer never interprets these; they exist so token-based overlay
/// providers can decide whether they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
	/// A quoted string literal. The token text includes the quotes.
	String,
	Number,
	/// Bare words such as `true`, `false` and `null`.
	Atom,
	Punctuation,
	Whitespace,
	#[default]
	Other,
}

/// The token under the cursor for a hover query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Token {
	/// Character offset where the token starts on its line.
	pub start: u32,
	/// Character offset one past the token's last character.
	pub end: u32,
	/// Raw token text exactly as displayed.
	pub text: String,
	pub kind: TokenKind,
}

impl Token {
	pub fn new(start: u32, text: impl Into<String>, kind: TokenKind) -> Self {
		let text = text.into();
		let end = start + text.chars().count() as u32;
		Self { start, end, text, kind }
	}

	/// Returns the token text without surrounding quotes for string tokens.
	///
	/// Non-string tokens are returned as-is.
	pub fn unquoted(&self) -> &str {
		if self.kind != TokenKind::String {
			return &self.text;
		}
		let text = self.text.as_str();
		let text = text.strip_prefix('"').unwrap_or(text);
		text.strip_suffix('"').unwrap_or(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn end_counts_characters_not_bytes() {
		let token = Token::new(4, "\"héllo\"", TokenKind::String);
		assert_eq!(token.end, 11);
	}

	#[test]
	fn unquoted_strips_string_quotes_only() {
		assert_eq!(Token::new(0, "\"image.png\"", TokenKind::String).unquoted(), "image.png");
		assert_eq!(Token::new(0, "\"", TokenKind::String).unquoted(), "");
		assert_eq!(Token::new(0, "foo", TokenKind::Other).unquoted(), "foo");
	}
}
