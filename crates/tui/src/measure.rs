//! Viewport re-measurement after terminal resizes.

use std::time::{Duration, Instant};

use tsel_core::Viewport;

/// Quiet period a resize burst must settle for.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(120);

/// Collapses a burst of resize events into one re-measure.
#[derive(Debug, Clone)]
pub struct ResizeDebounce {
	delay: Duration,
	pending: Option<(Instant, Viewport)>,
}

impl Default for ResizeDebounce {
	fn default() -> Self {
		Self::new(RESIZE_DEBOUNCE)
	}
}

impl ResizeDebounce {
	/// Debounce with a custom delay.
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	/// Record a resize to `viewport` seen at `now`.
	pub fn notify(&mut self, viewport: Viewport, now: Instant) {
		log::trace!("resize to {}x{} queued", viewport.width, viewport.height);
		self.pending = Some((now, viewport));
	}

	/// Whether a resize is still settling.
	#[must_use]
	pub fn is_pending(&self, now: Instant) -> bool {
		self.pending
			.is_some_and(|(at, _)| now.saturating_duration_since(at) < self.delay)
	}

	/// Take the settled viewport once the quiet period has passed.
	pub fn poll(&mut self, now: Instant) -> Option<Viewport> {
		let (at, viewport) = self.pending?;
		if now.saturating_duration_since(at) < self.delay {
			return None;
		}
		self.pending = None;
		log::debug!("viewport settled at {}x{}", viewport.width, viewport.height);
		Some(viewport)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn burst_settles_on_last_viewport() {
		let start = Instant::now();
		let mut debounce = ResizeDebounce::default();
		debounce.notify(Viewport::new(80, 24), start);
		debounce.notify(Viewport::new(100, 30), start + Duration::from_millis(50));

		let early = start + Duration::from_millis(100);
		assert!(debounce.is_pending(early));
		assert_eq!(debounce.poll(early), None);

		let settled = start + Duration::from_millis(200);
		assert!(!debounce.is_pending(settled));
		assert_eq!(debounce.poll(settled), Some(Viewport::new(100, 30)));
		assert_eq!(debounce.poll(settled), None);
	}
}
