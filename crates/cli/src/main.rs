mod cli;
mod providers;

use std::io::Read;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use providers::{ImageUrlPreview, LocationTooltip};
use resview_headless::{HeadlessFactory, HeadlessNode};
use resview_viewer::{ResultViewer, TextWidget, ViewerConfig, ViewerSettings};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "RESVIEW_LOG";

fn main() -> anyhow::Result<()> {
	init_logging();
	let cli = Cli::parse();

	let settings = match &cli.settings {
		Some(path) => ViewerSettings::load(path)?,
		None => ViewerSettings::default(),
	};
	let payload = read_payload(&cli)?;
	let display_text = pretty_print(&payload)?;

	let mut config = ViewerConfig::new(display_text).with_tooltip(Rc::new(LocationTooltip));
	if !cli.no_preview {
		config = config.with_preview(Rc::new(ImageUrlPreview));
	}
	if let Some(theme) = cli.theme.clone() {
		config = config.with_theme(theme);
	}

	let mut viewer = ResultViewer::with_settings(HeadlessFactory::new(), settings);
	viewer.mount(config, Some(HeadlessNode::new(0)))?;
	let widget = viewer.handle().context("viewer did not mount")?;
	tracing::debug!(lines = widget.line_count(), theme = %widget.options().theme, "Mounted payload");

	if cli.hover.is_empty() {
		println!("{}", widget.value());
	}
	for pos in &cli.hover {
		let line = widget.line(pos.line as usize).unwrap_or_default();
		println!("{}:{} {}", pos.line + 1, pos.ch + 1, line.trim());
		match widget.hover_at(*pos).and_then(|target| target.composite()) {
			Some(composite) => println!("{composite}\n"),
			None => println!("(no overlay)\n"),
		}
	}

	viewer.unmount();
	Ok(())
}

fn init_logging() {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn read_payload(cli: &Cli) -> anyhow::Result<String> {
	match &cli.input {
		Some(path) => std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())),
		None => {
			let mut buf = String::new();
			std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
			Ok(buf)
		}
	}
}

/// Reformats a JSON payload the way the result panel displays it.
fn pretty_print(payload: &str) -> anyhow::Result<String> {
	let value: serde_json::Value = serde_json::from_str(payload).context("payload is not valid JSON")?;
	Ok(serde_json::to_string_pretty(&value)?)
}
