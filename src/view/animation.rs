// SPDX-License-Identifier: MPL-2.0
//! Time-based transitions on top of [`iced::Animation`].
//!
//! Nothing here reads the clock. A [`Window`] is scheduled by its first
//! [`Window::start`] call and a [`Transition`] by its first
//! [`Transition::advance`], so every curve can be sampled at any `Instant`.

use iced::animation::Easing;
use iced::Animation;
use std::time::{Duration, Instant};

/// Curve of overlay enter, exit and relayout transitions.
pub const TRANSITION_EASING: Easing = Easing::EaseOut;

/// Curve of the indeterminate progress pulse (a sine ease-out).
pub const PULSE_EASING: Easing = Easing::EaseOut;

/// Linear interpolation.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// An eased 0 → 1 progression over a window that opens `begin` after its
/// origin and lasts `length`.
#[derive(Debug, Clone)]
pub struct Window {
    animation: Animation<bool>,
    begin: Duration,
    length: Duration,
    opened_at: Option<Instant>,
}

impl Window {
    #[must_use]
    pub fn new(begin: Duration, length: Duration, easing: Easing) -> Self {
        Self {
            animation: Animation::new(false).duration(length).easing(easing),
            begin,
            length,
            opened_at: None,
        }
    }

    /// Fixes the origin of the window. Later calls are ignored.
    pub fn start(&mut self, origin: Instant) {
        if self.opened_at.is_some() {
            return;
        }
        let opened_at = origin.checked_add(self.begin).unwrap_or(origin);
        self.animation.go_mut(true, opened_at);
        self.opened_at = Some(opened_at);
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.opened_at.is_some()
    }

    /// Eased progress at `now`: 0 until the window opens, 1 once it closed.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.length.is_zero() {
            return 1.0;
        }
        let Some(opened_at) = self.opened_at else {
            return 0.0;
        };
        if now <= opened_at {
            return 0.0;
        }
        if now.duration_since(opened_at) >= self.length {
            return 1.0;
        }
        self.animation.interpolate(0.0_f32, 1.0, now).clamp(0.0, 1.0)
    }
}

/// A one-shot eased transition. It starts on the first advance.
#[derive(Debug, Clone)]
pub struct Transition {
    window: Window,
    now: Option<Instant>,
}

impl Transition {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            window: Window::new(Duration::ZERO, duration, TRANSITION_EASING),
            now: None,
        }
    }

    /// Advances the transition to `now` and returns the eased progress.
    pub fn advance(&mut self, now: Instant) -> f32 {
        self.window.start(now);
        self.now = Some(now);
        self.eased()
    }

    /// Eased progress as of the last advance.
    #[must_use]
    pub fn eased(&self) -> f32 {
        match self.now {
            Some(now) => self.window.progress(now),
            None if self.window.length.is_zero() => 1.0,
            None => 0.0,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.eased() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn window_is_flat_outside_its_span() {
        let start = Instant::now();
        let mut window = Window::new(ms(100), ms(500), PULSE_EASING);
        assert_eq!(window.progress(start + ms(300)), 0.0);

        window.start(start);
        assert!(window.is_started());
        assert_eq!(window.progress(start + ms(50)), 0.0);
        assert_eq!(window.progress(start + ms(600)), 1.0);
        assert_eq!(window.progress(start + ms(900)), 1.0);
    }

    #[test]
    fn window_eases_out_and_never_goes_back() {
        let start = Instant::now();
        let mut window = Window::new(Duration::ZERO, ms(400), PULSE_EASING);
        window.start(start);

        let quarter = window.progress(start + ms(100));
        assert!(quarter > 0.25, "ease-out runs ahead of linear: {quarter}");

        let mut previous = 0.0;
        for step in 0..=40 {
            let value = window.progress(start + ms(step * 10));
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn restarting_a_window_keeps_its_origin() {
        let start = Instant::now();
        let mut window = Window::new(Duration::ZERO, ms(300), PULSE_EASING);
        window.start(start);
        window.start(start + ms(200));
        assert_eq!(window.progress(start + ms(300)), 1.0);
    }

    #[test]
    fn transition_starts_on_first_advance() {
        let start = Instant::now();
        let mut transition = Transition::new(ms(300));

        assert_eq!(transition.advance(start + Duration::from_secs(10)), 0.0);
        assert!(!transition.is_finished());

        let mid = transition.advance(start + ms(10_150));
        assert!(mid > 0.5 && mid < 1.0);

        transition.advance(start + ms(10_300));
        assert!(transition.is_finished());
    }

    #[test]
    fn zero_duration_is_finished_immediately() {
        let transition = Transition::new(Duration::ZERO);
        assert!(transition.is_finished());
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
