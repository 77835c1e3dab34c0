//! Cooperation with the host's sizing manager.
//!
//! Panels expose their rendered height through [`SizedPanel`]; the
//! [`HeightTracker`] remembers what it last saw and asks panels whose height
//! moved to recompute their widget layout.

use crate::lifecycle::ResultViewer;
use crate::widget::WidgetFactory;

/// A panel whose rendered height a sizing manager can observe.
pub trait SizedPanel {
	/// Rendered height of the panel's mount node, or `None` when unmounted.
	fn mounted_height(&self) -> Option<u32>;

	/// Recomputes layout after the panel's container changed size.
	fn refresh_layout(&mut self);
}

impl<F: WidgetFactory> SizedPanel for ResultViewer<F> {
	fn mounted_height(&self) -> Option<u32> {
		ResultViewer::mounted_height(self)
	}

	fn refresh_layout(&mut self) {
		ResultViewer::refresh_layout(self);
	}
}

/// Last-seen heights for an ordered set of panels.
#[derive(Debug, Default, Clone)]
pub struct HeightTracker {
	heights: Vec<Option<u32>>,
}

impl HeightTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Refreshes every mounted panel whose height changed since the last call.
	///
	/// Panels are identified by their index in `panels`. Unmounted panels are
	/// skipped and their last height forgotten. Returns the number of panels
	/// refreshed.
	pub fn update_sizes(&mut self, panels: &mut [&mut dyn SizedPanel]) -> usize {
		self.heights.resize(panels.len(), None);
		let mut refreshed = 0;

		for (panel, last) in panels.iter_mut().zip(self.heights.iter_mut()) {
			let height = panel.mounted_height();
			if height.is_some() && height != *last {
				tracing::trace!(?height, previous = ?last, "Panel height changed");
				panel.refresh_layout();
				refreshed += 1;
			}
			*last = height;
		}

		refreshed
	}

	/// Last recorded height of the panel at `index`.
	pub fn last_height(&self, index: usize) -> Option<u32> {
		self.heights.get(index).copied().flatten()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ViewerConfig;
	use crate::test_support::{RecordingFactory, RecordingNode};

	#[derive(Debug, Default)]
	struct FakePanel {
		height: Option<u32>,
		refreshes: usize,
	}

	impl SizedPanel for FakePanel {
		fn mounted_height(&self) -> Option<u32> {
			self.height
		}

		fn refresh_layout(&mut self) {
			self.refreshes += 1;
		}
	}

	#[test]
	fn first_observation_refreshes_mounted_panels() {
		let mut tracker = HeightTracker::new();
		let mut a = FakePanel {
			height: Some(100),
			..Default::default()
		};
		let mut b = FakePanel::default();

		assert_eq!(tracker.update_sizes(&mut [&mut a, &mut b]), 1);
		assert_eq!(a.refreshes, 1);
		assert_eq!(b.refreshes, 0);
		assert_eq!(tracker.last_height(0), Some(100));
		assert_eq!(tracker.last_height(1), None);
	}

	#[test]
	fn only_changed_heights_refresh() {
		let mut tracker = HeightTracker::new();
		let mut a = FakePanel {
			height: Some(100),
			..Default::default()
		};
		let mut b = FakePanel {
			height: Some(50),
			..Default::default()
		};
		tracker.update_sizes(&mut [&mut a, &mut b]);

		b.height = Some(70);
		assert_eq!(tracker.update_sizes(&mut [&mut a, &mut b]), 1);
		assert_eq!((a.refreshes, b.refreshes), (1, 2));

		assert_eq!(tracker.update_sizes(&mut [&mut a, &mut b]), 0);
	}

	#[test]
	fn remounted_panel_refreshes_again() {
		let mut tracker = HeightTracker::new();
		let mut a = FakePanel {
			height: Some(100),
			..Default::default()
		};
		tracker.update_sizes(&mut [&mut a]);

		a.height = None;
		assert_eq!(tracker.update_sizes(&mut [&mut a]), 0);
		a.height = Some(100);
		assert_eq!(tracker.update_sizes(&mut [&mut a]), 1);
		assert_eq!(a.refreshes, 2);
	}

	#[test]
	fn viewer_reports_node_height_and_refreshes_widget() {
		let mut viewer = ResultViewer::new(RecordingFactory::default());
		assert_eq!(SizedPanel::mounted_height(&viewer), None);

		viewer
			.mount(ViewerConfig::new("{}"), Some(RecordingNode::with_height(320)))
			.unwrap();
		let mut tracker = HeightTracker::new();
		assert_eq!(tracker.update_sizes(&mut [&mut viewer]), 1);
		assert_eq!(tracker.last_height(0), Some(320));
		assert_eq!(viewer.factory().log.refreshes.get(), 1);
	}
}
