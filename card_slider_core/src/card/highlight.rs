// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch highlight overlay fade.

use crate::time::{Duration, HostTime, Timebase};

/// Overlay alpha while a card is pressed.
pub const HIGHLIGHT_ALPHA: f64 = 0.2;

/// Length of the press fade-in, in nanoseconds.
pub const HIGHLIGHT_FADE_NANOS: u64 = 300_000_000;

/// A linear fade of the black highlight overlay.
///
/// Pressing fades toward [`HIGHLIGHT_ALPHA`] over
/// [`HIGHLIGHT_FADE_NANOS`]; releasing snaps back to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightFade {
    from: f64,
    to: f64,
    start: HostTime,
    span: Duration,
}

impl Default for HighlightFade {
    fn default() -> Self {
        Self::IDLE
    }
}

impl HighlightFade {
    /// No highlight.
    pub const IDLE: Self = Self {
        from: 0.0,
        to: 0.0,
        start: HostTime(0),
        span: Duration::ZERO,
    };

    /// Starts a press fade from the alpha currently showing at `now`.
    #[must_use]
    pub fn press(self, now: HostTime, timebase: Timebase) -> Self {
        Self {
            from: self.alpha_at(now),
            to: HIGHLIGHT_ALPHA,
            start: now,
            span: Duration::from_nanos(HIGHLIGHT_FADE_NANOS, timebase),
        }
    }

    /// Clears the highlight immediately.
    #[must_use]
    pub fn release(self) -> Self {
        Self::IDLE
    }

    /// Overlay alpha at `now`.
    #[must_use]
    pub fn alpha_at(&self, now: HostTime) -> f64 {
        let t = now.progress_since(self.start, self.span);
        self.from + (self.to - self.from) * t
    }

    /// Alpha the fade is heading toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the fade has reached its target at `now`.
    #[must_use]
    pub fn is_settled(&self, now: HostTime) -> bool {
        now.progress_since(self.start, self.span) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_fades_in_over_three_hundred_millis() {
        let tb = Timebase::NANOS;
        let fade = HighlightFade::IDLE.press(HostTime(1_000), tb);
        assert_eq!(fade.alpha_at(HostTime(1_000)), 0.0);
        let halfway = fade.alpha_at(HostTime(1_000 + 150_000_000));
        assert!((halfway - 0.1).abs() < 1e-12, "halfway = {halfway}");
        assert_eq!(fade.alpha_at(HostTime(1_000 + 300_000_000)), HIGHLIGHT_ALPHA);
        assert!(fade.is_settled(HostTime(1_000 + 300_000_000)));
    }

    #[test]
    fn release_is_immediate() {
        let tb = Timebase::NANOS;
        let pressed = HighlightFade::IDLE.press(HostTime(0), tb);
        let released = pressed.release();
        assert_eq!(released.alpha_at(HostTime(1)), 0.0);
        assert!(released.is_settled(HostTime(0)));
    }

    #[test]
    fn repress_starts_from_current_alpha() {
        let tb = Timebase::NANOS;
        let first = HighlightFade::IDLE.press(HostTime(0), tb);
        let again = first.press(HostTime(150_000_000), tb);
        assert!((again.alpha_at(HostTime(150_000_000)) - 0.1).abs() < 1e-12);
        assert_eq!(again.target(), HIGHLIGHT_ALPHA);
    }
}
