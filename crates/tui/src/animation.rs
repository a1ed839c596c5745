//! Row highlight fades.
//!
//! A fade runs for [`FADE_DURATION`] towards the theme's selection effect
//! colour and back. Fades are cosmetic; nothing reads them except rendering.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Length of each fade direction.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
	In,
	Out,
	/// In, then straight back out.
	Pulse,
}

/// One fade in flight.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
	started: Instant,
	direction: Direction,
	from: f32,
}

impl Fade {
	/// Start fading towards the effect colour.
	#[must_use]
	pub fn fade_in(now: Instant) -> Self {
		Self {
			started: now,
			direction: Direction::In,
			from: 0.0,
		}
	}

	/// Fade in fully, then fade out again without waiting for a release.
	#[must_use]
	pub fn pulse(now: Instant) -> Self {
		Self {
			started: now,
			direction: Direction::Pulse,
			from: 0.0,
		}
	}

	/// Intensity in `0.0..=1.0` at `now`.
	#[must_use]
	pub fn intensity(&self, now: Instant) -> f32 {
		let elapsed = now.saturating_duration_since(self.started);
		let t = elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32();
		match self.direction {
			Direction::In => self.from + (1.0 - self.from) * t.min(1.0),
			Direction::Out => self.from * (1.0 - t.min(1.0)),
			Direction::Pulse if t <= 1.0 => t,
			Direction::Pulse => (2.0 - t).max(0.0),
		}
	}

	fn span(&self) -> Duration {
		match self.direction {
			Direction::Pulse => FADE_DURATION * 2,
			Direction::In | Direction::Out => FADE_DURATION,
		}
	}

	/// Reverse towards the base colour from wherever the fade currently is.
	#[must_use]
	pub fn reversed(&self, now: Instant) -> Self {
		Self {
			started: now,
			direction: Direction::Out,
			from: self.intensity(now),
		}
	}

	/// A fade-out that has reached zero.
	#[must_use]
	pub fn is_finished(&self, now: Instant) -> bool {
		self.direction != Direction::In && now.saturating_duration_since(self.started) >= self.span()
	}

	/// Whether the intensity is still changing.
	#[must_use]
	pub fn is_animating(&self, now: Instant) -> bool {
		now.saturating_duration_since(self.started) < self.span()
	}
}

/// Fades keyed by option key.
#[derive(Debug, Default)]
pub struct Fades {
	rows: HashMap<String, Fade>,
	hovered: Option<String>,
}

impl Fades {
	/// Point the hover at `key`, fading the previous row out.
	pub fn hover(&mut self, key: Option<&str>, now: Instant) {
		if self.hovered.as_deref() == key {
			return;
		}
		if let Some(previous) = self.hovered.take() {
			self.release(&previous, now);
		}
		if let Some(key) = key {
			self.rows.insert(key.to_string(), Fade::fade_in(now));
			self.hovered = Some(key.to_string());
		}
	}

	/// Flash `key` as pressed. A hovered row stays lit until the hover
	/// leaves; any other row fades in and then back out.
	pub fn press(&mut self, key: &str, now: Instant) {
		let fade = if self.hovered.as_deref() == Some(key) {
			Fade::fade_in(now)
		} else {
			Fade::pulse(now)
		};
		self.rows.insert(key.to_string(), fade);
	}

	fn release(&mut self, key: &str, at: Instant) {
		if let Some(fade) = self.rows.get_mut(key) {
			*fade = fade.reversed(at);
		}
	}

	/// Current intensity for `key`.
	#[must_use]
	pub fn intensity(&self, key: &str, now: Instant) -> f32 {
		self.rows.get(key).map_or(0.0, |fade| fade.intensity(now))
	}

	/// Drop finished fades; returns whether any fade is still animating.
	pub fn prune(&mut self, now: Instant) -> bool {
		self.rows.retain(|_, fade| !fade.is_finished(now));
		self.rows.values().any(|fade| fade.is_animating(now))
	}

	/// Forget every fade.
	pub fn clear(&mut self) {
		self.rows.clear();
		self.hovered = None;
	}
}

/// Blend `base` towards `effect` by `t`.
///
/// Only RGB colours interpolate; anything else snaps at the halfway point.
#[must_use]
pub fn blend(base: Color, effect: Color, t: f32) -> Color {
	let t = t.clamp(0.0, 1.0);
	match (base, effect) {
		(Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
			let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
			Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
		}
		_ if t >= 0.5 => effect,
		_ => base,
	}
}
