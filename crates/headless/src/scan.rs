//! Line tokenizer for JSON-shaped result text.
//!
//! Good enough to answer "which token is under the cursor" for hover queries.
//! It does not validate anything and never fails: unknown characters become
//! single-character [`TokenKind::Other`] tokens and an unterminated string
//! runs to the end of the line.

use resview_primitives::{Token, TokenKind};

/// Splits one line (without its line break) into tokens.
pub fn tokenize_line(line: &str) -> Vec<Token> {
	let chars: Vec<char> = line.chars().collect();
	let mut tokens = Vec::new();
	let mut i = 0;

	while i < chars.len() {
		let start = i;
		let kind = match chars[i] {
			c if c.is_whitespace() => {
				while i < chars.len() && chars[i].is_whitespace() {
					i += 1;
				}
				TokenKind::Whitespace
			}
			'"' => {
				i += 1;
				while i < chars.len() {
					match chars[i] {
						'\\' => i += 2,
						'"' => {
							i += 1;
							break;
						}
						_ => i += 1,
					}
				}
				i = i.min(chars.len());
				TokenKind::String
			}
			'-' | '0'..='9' => {
				i += 1;
				while i < chars.len() && matches!(chars[i], '0'..='9' | '.' | 'e' | 'E' | '+' | '-') {
					i += 1;
				}
				TokenKind::Number
			}
			c if c.is_alphabetic() || c == '_' => {
				while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
					i += 1;
				}
				TokenKind::Atom
			}
			'{' | '}' | '[' | ']' | ':' | ',' => {
				i += 1;
				TokenKind::Punctuation
			}
			_ => {
				i += 1;
				TokenKind::Other
			}
		};
		let text: String = chars[start..i].iter().collect();
		tokens.push(Token::new(start as u32, text, kind));
	}

	tokens
}

/// Returns the token covering character `ch` of `line`.
///
/// A cursor just past the last character resolves to the last token.
pub fn token_at(line: &str, ch: u32) -> Option<Token> {
	let tokens = tokenize_line(line);
	let last_end = tokens.last().map_or(0, |t| t.end);
	if ch == last_end {
		return tokens.into_iter().last();
	}
	tokens.into_iter().find(|t| t.start <= ch && ch < t.end)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	fn kinds(line: &str) -> Vec<(String, TokenKind)> {
		tokenize_line(line).into_iter().map(|t| (t.text, t.kind)).collect()
	}

	#[test]
	fn splits_object_entry() {
		let expected = vec![
			("  ".to_string(), TokenKind::Whitespace),
			("\"url\"".to_string(), TokenKind::String),
			(":".to_string(), TokenKind::Punctuation),
			(" ".to_string(), TokenKind::Whitespace),
			("\"a \\\"b\\\".png\"".to_string(), TokenKind::String),
			(",".to_string(), TokenKind::Punctuation),
		];
		assert_eq!(kinds(r#"  "url": "a \"b\".png","#), expected);
	}

	#[test]
	fn numbers_and_atoms() {
		let expected = vec![
			("[".to_string(), TokenKind::Punctuation),
			("-1.5e3".to_string(), TokenKind::Number),
			(",".to_string(), TokenKind::Punctuation),
			("true".to_string(), TokenKind::Atom),
			(",".to_string(), TokenKind::Punctuation),
			("null".to_string(), TokenKind::Atom),
			("]".to_string(), TokenKind::Punctuation),
		];
		assert_eq!(kinds("[-1.5e3,true,null]"), expected);
	}

	#[test]
	fn unterminated_string_runs_to_end_of_line() {
		assert_eq!(kinds("\"abc\\"), vec![("\"abc\\".to_string(), TokenKind::String)]);
	}

	#[test]
	fn offsets_are_in_characters() {
		let tokens = tokenize_line("\"é\" 1");
		assert_eq!((tokens[0].start, tokens[0].end), (0, 3));
		assert_eq!((tokens[2].start, tokens[2].end), (4, 5));
	}

	#[rstest]
	#[case(0, Some("{"))]
	#[case(3, Some("\"k\""))]
	#[case(5, Some(":"))]
	#[case(6, Some(" "))]
	#[case(7, Some("\"image.png\""))]
	#[case(17, Some("\"image.png\""))]
	#[case(18, Some("}"))]
	#[case(19, Some("}"))]
	#[case(20, None)]
	fn token_at_resolves_cursor(#[case] ch: u32, #[case] expected: Option<&str>) {
		let line = r#"{ "k": "image.png"}"#;
		assert_eq!(token_at(line, ch).map(|t| t.text), expected.map(str::to_string));
	}

	#[test]
	fn empty_line_has_no_tokens() {
		assert!(tokenize_line("").is_empty());
		assert_eq!(token_at("", 0), None);
	}
}
