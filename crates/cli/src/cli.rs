use std::path::PathBuf;

use clap::Parser;
use resview_primitives::Position;

#[derive(Parser, Debug)]
#[command(name = "resview")]
#[command(about = "Display a JSON result payload and inspect hover overlays")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// JSON payload to display (reads stdin if omitted)
	pub input: Option<PathBuf>,

	/// Viewer settings file (TOML)
	#[arg(long, short = 's')]
	pub settings: Option<PathBuf>,

	/// Theme overriding the settings file
	#[arg(long, short = 't')]
	pub theme: Option<String>,

	/// Hover the given 1-based LINE:COL and print the overlay (repeatable)
	#[arg(long, value_parser = parse_hover)]
	pub hover: Vec<Position>,

	/// Disable the image preview provider
	#[arg(long)]
	pub no_preview: bool,
}

/// Parses a 1-based `LINE:COL` into a zero-based [`Position`].
fn parse_hover(s: &str) -> Result<Position, String> {
	let pos: Position = s.parse().map_err(|e| format!("{e}"))?;
	if pos.line == 0 || pos.ch == 0 {
		return Err(format!("LINE and COL start at 1, got {s:?}"));
	}
	Ok(Position::new(pos.line - 1, pos.ch - 1))
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn hover_is_converted_to_zero_based() {
		let cli = Cli::try_parse_from(["resview", "out.json", "--hover", "2:5", "--hover", "1:1"]).unwrap();
		assert_eq!(cli.hover, vec![Position::new(1, 4), Position::new(0, 0)]);
		assert_eq!(cli.input, Some(PathBuf::from("out.json")));
	}

	#[test]
	fn zero_hover_coordinates_are_rejected() {
		assert!(Cli::try_parse_from(["resview", "--hover", "0:3"]).is_err());
		assert!(Cli::try_parse_from(["resview", "--hover", "3"]).is_err());
	}
}
