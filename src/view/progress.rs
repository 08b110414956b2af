// SPDX-License-Identifier: MPL-2.0
//! Circular progress indicator state.
//!
//! A single `progress` value selects the mode: values in `[0, 1]` draw a
//! fixed arc, [`INDETERMINATE`] (any negative value) starts a rotating ring
//! whose arc length pulses forever. Each pulse cycle lengthens the arc, then
//! shrinks it from the tail, and hands its rotation offset to the next cycle.

use crate::config::{
    CIRCLE_BACKGROUND_LINE_WIDTH, CIRCLE_LINE_WIDTH, INDICATOR_SIZE, MAX_STROKE_LENGTH,
    MIN_STROKE_LENGTH, ROTATION_PERIOD,
};
use crate::view::animation::{lerp, Window, PULSE_EASING};
use iced::{Color, Point, Size};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Progress value that selects the indeterminate mode.
pub const INDETERMINATE: f32 = -1.0;

const STROKE_END_BEGIN: Duration = Duration::from_millis(100);
const STROKE_END_DURATION: Duration = Duration::from_millis(500);
const STROKE_START_BEGIN: Duration = Duration::from_millis(800);
const STROKE_START_DURATION: Duration = Duration::from_millis(400);
const CYCLE_DURATION: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Determinate(f32),
    Indeterminate,
}

/// Radii of the background ring and the foreground arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    pub background_radius: f32,
    pub radius: f32,
}

impl ArcGeometry {
    fn compute(bounds: Size, line_width: f32, background_line_width: f32) -> Self {
        let half = bounds.width.min(bounds.height) * 0.5;
        Self {
            center: Point::new(bounds.width * 0.5, bounds.height * 0.5),
            background_radius: (half - background_line_width * 0.5).max(0.0),
            radius: (half - line_width * 0.5 - (background_line_width - line_width) * 0.5)
                .max(0.0),
        }
    }
}

/// The arc as it should be drawn right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentedArc {
    /// Stroke start, as a fraction of a turn.
    pub start: f32,
    /// Stroke end, as a fraction of a turn.
    pub end: f32,
    /// Total rotation of the arc in radians.
    pub rotation: f32,
}

/// One pulse: the head runs ahead, then the tail catches up.
#[derive(Debug, Clone)]
struct StrokeCycle {
    end_window: Window,
    start_window: Window,
    end_from: f32,
    end_to: f32,
    start_from: f32,
    start_to: f32,
}

impl StrokeCycle {
    fn new(stroke_start: f32, stroke_end: f32, min: f32, max: f32) -> Self {
        let end_to = stroke_end + max;
        Self {
            end_window: Window::new(STROKE_END_BEGIN, STROKE_END_DURATION, PULSE_EASING),
            start_window: Window::new(STROKE_START_BEGIN, STROKE_START_DURATION, PULSE_EASING),
            end_from: stroke_end,
            end_to,
            start_from: stroke_start,
            start_to: (end_to - min).abs(),
        }
    }

    fn start(&mut self, origin: Instant) {
        self.end_window.start(origin);
        self.start_window.start(origin);
    }

    fn sample(&self, now: Instant) -> (f32, f32) {
        (
            lerp(self.start_from, self.start_to, self.start_window.progress(now)),
            lerp(self.end_from, self.end_to, self.end_window.progress(now)),
        )
    }
}

#[derive(Debug, Clone)]
struct Spin {
    started_at: Option<Instant>,
    cycle_started_at: Option<Instant>,
    /// Continuous rotation of the whole ring.
    ring_rotation: f32,
    /// Offset accumulated by completed pulse cycles.
    arc_rotation: f32,
    cycle: StrokeCycle,
    start: f32,
    end: f32,
}

#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    progress: f32,
    min_stroke_length: f32,
    max_stroke_length: f32,
    line_width: f32,
    background_line_width: f32,
    color: Color,
    background_color: Color,
    bounds: Size,
    arc: ArcGeometry,
    stroke_start: f32,
    stroke_end: f32,
    spin: Option<Spin>,
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressIndicator {
    #[must_use]
    pub fn new() -> Self {
        let bounds = Size::new(INDICATOR_SIZE, INDICATOR_SIZE);
        Self {
            progress: 0.0,
            min_stroke_length: MIN_STROKE_LENGTH,
            max_stroke_length: MAX_STROKE_LENGTH,
            line_width: CIRCLE_LINE_WIDTH,
            background_line_width: CIRCLE_BACKGROUND_LINE_WIDTH,
            color: Color::WHITE,
            background_color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            bounds,
            arc: ArcGeometry::compute(bounds, CIRCLE_LINE_WIDTH, CIRCLE_BACKGROUND_LINE_WIDTH),
            stroke_start: 0.0,
            stroke_end: 0.0,
            spin: None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.progress < 0.0 {
            Mode::Indeterminate
        } else {
            Mode::Determinate(self.stroke_end)
        }
    }

    /// Sets the progress, stopping any running animation first.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
        self.stop();
        if progress < 0.0 {
            self.restart();
        } else {
            self.stroke_end = progress.min(1.0);
        }
    }

    pub fn set_min_stroke_length(&mut self, length: f32) {
        self.min_stroke_length = length;
        self.restart_if_spinning();
    }

    pub fn set_max_stroke_length(&mut self, length: f32) {
        self.max_stroke_length = length;
        self.restart_if_spinning();
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
        self.recompute_arc();
    }

    pub fn set_background_line_width(&mut self, width: f32) {
        self.background_line_width = width;
        self.recompute_arc();
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.recompute_arc();
        }
    }

    pub fn set_colors(&mut self, color: Color, background_color: Color) {
        self.color = color;
        self.background_color = background_color;
    }

    #[must_use]
    pub fn arc(&self) -> ArcGeometry {
        self.arc
    }

    #[must_use]
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    #[must_use]
    pub fn background_line_width(&self) -> f32 {
        self.background_line_width
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.spin.is_some()
    }

    #[must_use]
    pub fn presented(&self) -> PresentedArc {
        match &self.spin {
            Some(spin) => PresentedArc {
                start: spin.start,
                end: spin.end,
                rotation: spin.ring_rotation + spin.arc_rotation,
            },
            None => PresentedArc {
                start: self.stroke_start,
                end: self.stroke_end,
                rotation: 0.0,
            },
        }
    }

    /// Advances the indeterminate animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        let (stroke_start, stroke_end) = (self.stroke_start, self.stroke_end);
        let (min, max) = (self.min_stroke_length, self.max_stroke_length);
        let Some(spin) = self.spin.as_mut() else {
            return;
        };

        let started_at = *spin.started_at.get_or_insert(now);
        let turns = now.saturating_duration_since(started_at).as_secs_f32()
            / ROTATION_PERIOD.as_secs_f32();
        spin.ring_rotation = turns.fract() * TAU;

        let mut cycle_start = *spin.cycle_started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(cycle_start);
        if elapsed >= CYCLE_DURATION {
            let completed = (elapsed.as_millis() / CYCLE_DURATION.as_millis()) as u32;
            cycle_start += CYCLE_DURATION * completed;
            spin.arc_rotation =
                (spin.arc_rotation + TAU * max * completed as f32).rem_euclid(TAU);
            spin.cycle = StrokeCycle::new(stroke_start, stroke_end, min, max);
            spin.cycle_started_at = Some(cycle_start);
        }
        spin.cycle.start(cycle_start);

        let (start, end) = spin.cycle.sample(now);
        spin.start = start;
        spin.end = end;
    }

    fn stop(&mut self) {
        self.spin = None;
        self.stroke_start = 0.0;
        self.stroke_end = 0.0;
    }

    fn restart(&mut self) {
        self.stroke_end = self.min_stroke_length;
        self.spin = Some(Spin {
            started_at: None,
            cycle_started_at: None,
            ring_rotation: 0.0,
            arc_rotation: 0.0,
            cycle: StrokeCycle::new(
                self.stroke_start,
                self.stroke_end,
                self.min_stroke_length,
                self.max_stroke_length,
            ),
            start: self.stroke_start,
            end: self.stroke_end,
        });
    }

    fn restart_if_spinning(&mut self) {
        if self.progress < 0.0 {
            self.stop();
            self.restart();
        }
    }

    fn recompute_arc(&mut self) {
        self.arc = ArcGeometry::compute(self.bounds, self.line_width, self.background_line_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn determinate_progress_is_static() {
        let mut indicator = ProgressIndicator::new();
        indicator.set_progress(0.3);

        assert_eq!(indicator.mode(), Mode::Determinate(0.3));
        assert!(!indicator.is_animating());
        let arc = indicator.presented();
        assert_eq!((arc.start, arc.end, arc.rotation), (0.0, 0.3, 0.0));
    }

    #[test]
    fn indeterminate_starts_at_min_stroke() {
        let mut indicator = ProgressIndicator::new();
        indicator.set_progress(INDETERMINATE);

        assert_eq!(indicator.mode(), Mode::Indeterminate);
        assert!(indicator.is_animating());
        assert_eq!(indicator.presented().end, MIN_STROKE_LENGTH);
    }

    #[test]
    fn pulse_lengthens_then_chains_into_next_cycle() {
        let start = Instant::now();
        let mut indicator = ProgressIndicator::new();
        indicator.set_progress(INDETERMINATE);

        indicator.tick(start);
        indicator.tick(start + ms(700));
        let grown = indicator.presented();
        assert!((grown.end - (MIN_STROKE_LENGTH + MAX_STROKE_LENGTH)).abs() < 1e-4);
        assert_eq!(grown.start, 0.0);

        indicator.tick(start + ms(1200));
        let restarted = indicator.presented();
        assert!((restarted.end - MIN_STROKE_LENGTH).abs() < 1e-4);
        let expected_offset = (TAU * MAX_STROKE_LENGTH).rem_euclid(TAU);
        let ring = (1.2 / ROTATION_PERIOD.as_secs_f32()).fract() * TAU;
        assert!((restarted.rotation - (ring + expected_offset)).abs() < 1e-3);
    }

    #[test]
    fn tail_catches_up_at_end_of_cycle() {
        let start = Instant::now();
        let mut indicator = ProgressIndicator::new();
        indicator.set_progress(INDETERMINATE);

        indicator.tick(start);
        indicator.tick(start + ms(1199));
        let arc = indicator.presented();
        assert!(arc.end - arc.start < 0.1);
    }

    #[test]
    fn assigning_progress_stops_animation() {
        let start = Instant::now();
        let mut indicator = ProgressIndicator::new();
        indicator.set_progress(INDETERMINATE);
        indicator.tick(start);
        indicator.tick(start + ms(400));

        indicator.set_progress(0.6);
        assert!(!indicator.is_animating());
        assert_eq!(indicator.presented().end, 0.6);
        assert_eq!(indicator.presented().rotation, 0.0);
    }

    #[test]
    fn stroke_length_change_restarts_spin() {
        let start = Instant::now();
        let mut indicator = ProgressIndicator::new();
        indicator.set_progress(INDETERMINATE);
        indicator.tick(start);
        indicator.tick(start + ms(500));

        indicator.set_min_stroke_length(0.1);
        assert!(indicator.is_animating());
        assert_eq!(indicator.presented().end, 0.1);

        let mut determinate = ProgressIndicator::new();
        determinate.set_progress(0.4);
        determinate.set_max_stroke_length(0.5);
        assert!(!determinate.is_animating());
    }

    #[test]
    fn arc_geometry_follows_line_widths_and_bounds() {
        let mut indicator = ProgressIndicator::new();
        assert_eq!(indicator.arc().background_radius, 17.5);
        assert_eq!(indicator.arc().radius, 17.5);

        indicator.set_background_line_width(9.0);
        assert_eq!(indicator.arc().background_radius, 15.5);

        indicator.set_bounds(Size::new(60.0, 60.0));
        assert_eq!(indicator.arc().center, Point::new(30.0, 30.0));
        assert_eq!(indicator.arc().background_radius, 25.5);
    }
}
