use crate::config::ViewerConfig;

/// Decides whether a config change must be pushed into the widget.
///
/// Only the displayed text is compared. Re-setting a widget's value forces a
/// full re-layout, so identical text is never pushed twice.
pub fn should_update<N>(previous: &ViewerConfig<N>, next: &ViewerConfig<N>) -> bool {
	previous.display_text != next.display_text
}

#[cfg(test)]
mod tests {
	use std::rc::Rc;

	use super::*;
	use crate::test_support::{EchoTooltip, RecordingNode};

	type Config = ViewerConfig<RecordingNode>;

	#[test]
	fn identical_text_does_not_update() {
		assert!(!should_update(&Config::new("{\"a\":1}"), &Config::new("{\"a\":1}")));
	}

	#[test]
	fn changed_text_updates() {
		assert!(should_update(&Config::new("{}"), &Config::new("{\"a\":1}")));
		assert!(should_update(&Config::new("x"), &Config::new("")));
	}

	#[test]
	fn non_text_fields_are_ignored() {
		let previous = Config::new("{}");
		let next = Config::new("{}").with_theme("midnight").with_tooltip(Rc::new(EchoTooltip::default()));
		assert!(!should_update(&previous, &next));
	}
}
