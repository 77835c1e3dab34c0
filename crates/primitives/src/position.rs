use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A cursor position in displayed text.
///
/// Both coordinates are zero-based and measured in characters, matching the
/// coordinate space the widget reports hover events in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	/// Line index.
	pub line: u32,
	/// Character offset within the line.
	pub ch: u32,
}

impl Position {
	pub const fn new(line: u32, ch: u32) -> Self {
		Self { line, ch }
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.ch)
	}
}

/// Error returned when a `line:ch` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePositionError {
	#[error("expected LINE:CH, got {0:?}")]
	MissingSeparator(String),
	#[error("invalid {axis} in position: {value:?}")]
	InvalidNumber { axis: &'static str, value: String },
}

impl FromStr for Position {
	type Err = ParsePositionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (line, ch) = s
			.trim()
			.split_once(':')
			.ok_or_else(|| ParsePositionError::MissingSeparator(s.to_string()))?;
		let parse = |axis: &'static str, value: &str| {
			value.trim().parse::<u32>().map_err(|_| ParsePositionError::InvalidNumber {
				axis,
				value: value.to_string(),
			})
		};
		Ok(Self::new(parse("line", line)?, parse("ch", ch)?))
	}
}
