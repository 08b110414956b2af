// SPDX-License-Identifier: MPL-2.0
//! Overlay view: the visual state of one task.
//!
//! A view moves through `Detached → Entering → Visible → Exiting → Detached`.
//! Reconfiguring a visible view keeps it `Visible` and animates its frame
//! from the old resting place to the new one.

use crate::assets::IconName;
use crate::config::OFFSCREEN_SCALE;
use crate::environment::{Metrics, Surface};
use crate::hud::TaskId;
use crate::view::animation::{lerp, Transition};
use crate::view::geometry::{
    self, offscreen_origin, resting_origin, Direction, Layout, LayoutInput, Limits, Position,
    TextMeasurer,
};
use crate::view::progress::ProgressIndicator;
use crate::view::timer::AutoHideTimer;
use iced::widget::svg;
use iced::{Point, Rectangle, Vector};
use std::time::{Duration, Instant};

/// Lifecycle phase of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Detached,
    Entering,
    Visible,
    Exiting,
}

/// A resolved status icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub name: IconName,
    pub handle: svg::Handle,
}

/// What occupies the indicator slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Indicator {
    #[default]
    None,
    /// A progress value; negative values are indeterminate.
    Progress(f32),
    Icon(Icon),
}

/// Everything shown by a card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Content {
    pub indicator: Indicator,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub direction: Direction,
    pub position: Position,
    pub closeable: bool,
    pub cancelable: bool,
}

/// Something that finished during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Enter or relayout completed; the view is fully visible.
    Shown,
    /// Exit completed; the view is detached.
    Hidden { auto_next: bool },
    /// The auto-hide timer fired.
    AutoHide,
}

/// Interactive areas of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Close,
    Cancel,
}

/// Presentation of the card right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub frame: Rectangle,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Enter,
    /// Leaves from `from` presence, so an interrupted entrance never snaps
    /// to full size before fading out.
    Exit { auto_next: bool, from: f32 },
    Relayout { from: Point },
}

/// The card of one task: content, layout, transitions, the progress
/// indicator and the auto-hide timer.
#[derive(Debug, Clone)]
pub struct OverlayView {
    task: TaskId,
    phase: Phase,
    content: Content,
    surface: Surface,
    metrics: Metrics,
    layout: Layout,
    origin: Point,
    motion: Option<(Motion, Transition)>,
    progress: ProgressIndicator,
    auto_hide: AutoHideTimer,
}

impl OverlayView {
    /// Creates a detached view and sizes it for `content`.
    pub fn new(
        task: TaskId,
        content: Content,
        surface: Surface,
        metrics: Metrics,
        limits: &Limits,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let mut view = Self {
            task,
            phase: Phase::Detached,
            content: Content::default(),
            surface,
            metrics,
            layout: Layout::default(),
            origin: Point::ORIGIN,
            motion: None,
            progress: ProgressIndicator::new(),
            auto_hide: AutoHideTimer::default(),
        };
        view.apply(content, limits, measurer);
        view
    }

    /// The task this view belongs to.
    #[must_use]
    pub fn task(&self) -> TaskId {
        self.task
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Content shown by the card.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Card size and element frames, relative to the card origin.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The progress indicator drawn in the indicator slot.
    #[must_use]
    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }

    /// Surface the view is attached to.
    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Resting frame on the surface.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        Rectangle::new(self.origin, self.layout.size)
    }

    /// Whether the view is on screen or on its way.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.phase != Phase::Detached
    }

    /// Whether the view shows, or is about to show, without leaving.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Visible)
    }

    /// Whether a transition or the indeterminate indicator needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some() || (self.is_attached() && self.progress.is_animating())
    }

    /// Whether the auto-hide timer is armed.
    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.auto_hide.is_armed()
    }

    /// Reconfigures the view in place.
    ///
    /// A visible view on the same surface animates to its new frame without
    /// leaving the `Visible` phase. Moving to another surface replays the
    /// entrance there.
    pub fn update(
        &mut self,
        content: Content,
        surface: Surface,
        metrics: Metrics,
        limits: &Limits,
        measurer: &dyn TextMeasurer,
        duration: Duration,
    ) {
        let from = self.presented_origin();
        let moved = surface.id != self.surface.id;
        self.surface = surface;
        self.metrics = metrics;
        self.auto_hide.cancel();
        self.apply(content, limits, measurer);

        match self.phase {
            Phase::Visible if moved => {
                self.phase = Phase::Entering;
                self.motion = Some((Motion::Enter, Transition::new(duration)));
            }
            Phase::Visible => {
                self.motion = Some((Motion::Relayout { from }, Transition::new(duration)));
            }
            Phase::Entering | Phase::Exiting | Phase::Detached => {}
        }
    }

    /// Recomputes the layout after the surface changed size.
    pub fn resize(
        &mut self,
        surface: Surface,
        metrics: Metrics,
        limits: &Limits,
        measurer: &dyn TextMeasurer,
    ) {
        self.surface = surface;
        self.metrics = metrics;
        let content = std::mem::take(&mut self.content);
        self.relayout(&content, limits, measurer);
        self.content = content;
    }

    /// Starts the entrance. Returns `false` unless the view was detached.
    pub fn begin_enter(&mut self, duration: Duration) -> bool {
        if self.phase != Phase::Detached {
            return false;
        }
        self.phase = Phase::Entering;
        self.motion = Some((Motion::Enter, Transition::new(duration)));
        true
    }

    /// Starts the exit and cancels any pending auto-hide.
    ///
    /// Returns `false` when the view is not showing.
    pub fn begin_exit(&mut self, duration: Duration, auto_next: bool) -> bool {
        if !self.is_showing() {
            return false;
        }
        self.auto_hide.cancel();
        let from = self.presence();
        self.phase = Phase::Exiting;
        self.motion = Some((Motion::Exit { auto_next, from }, Transition::new(duration)));
        true
    }

    /// Arms the auto-hide timer, measured from the next tick.
    pub fn arm_auto_hide(&mut self, delay: Duration) {
        self.auto_hide.arm(delay);
    }

    /// Arms the auto-hide timer, measured from `now`.
    pub fn arm_auto_hide_at(&mut self, delay: Duration, now: Instant) {
        self.auto_hide.arm_at(delay, now);
    }

    /// Disarms the auto-hide timer.
    pub fn cancel_auto_hide(&mut self) {
        self.auto_hide.cancel();
    }

    /// Advances animations and timers to `now`.
    pub fn tick(&mut self, now: Instant) -> Option<ViewEvent> {
        if self.is_attached() {
            self.progress.tick(now);
        }
        if let Some((_, transition)) = self.motion.as_mut() {
            transition.advance(now);
        }
        if let Some(event) = self.settle() {
            return Some(event);
        }
        if self.phase == Phase::Visible && self.auto_hide.poll(now) {
            return Some(ViewEvent::AutoHide);
        }
        None
    }

    /// Completes a finished transition, if any.
    pub fn settle(&mut self) -> Option<ViewEvent> {
        if !self.motion.as_ref()?.1.is_finished() {
            return None;
        }
        let (motion, _) = self.motion.take()?;
        match motion {
            Motion::Enter | Motion::Relayout { .. } => {
                self.phase = Phase::Visible;
                Some(ViewEvent::Shown)
            }
            Motion::Exit { auto_next, .. } => {
                self.phase = Phase::Detached;
                self.progress.set_progress(0.0);
                Some(ViewEvent::Hidden { auto_next })
            }
        }
    }

    /// How far the view is shown, from 0 (off screen) to 1 (at rest).
    #[must_use]
    pub fn presence(&self) -> f32 {
        match (self.phase, &self.motion) {
            (Phase::Detached, _) => 0.0,
            (Phase::Entering, Some((_, transition))) => transition.eased(),
            (Phase::Exiting, Some((Motion::Exit { from, .. }, transition))) => {
                lerp(*from, 0.0, transition.eased())
            }
            (Phase::Exiting, _) => 0.0,
            _ => 1.0,
        }
    }

    /// Frame, scale and opacity to draw the card with right now.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        let size = self.layout.size;
        let offscreen = offscreen_origin(
            self.content.position,
            size,
            self.surface.size,
            self.metrics,
        );

        let presence = self.presence();
        let origin = match &self.motion {
            Some((Motion::Relayout { from }, transition)) => {
                lerp_point(*from, self.origin, transition.eased())
            }
            _ => lerp_point(offscreen, self.origin, presence),
        };

        let (scale, opacity) = if self.content.position == Position::Center {
            (lerp(OFFSCREEN_SCALE, 1.0, presence), presence)
        } else {
            (1.0, 1.0)
        };

        Appearance {
            frame: Rectangle::new(origin, size),
            scale,
            opacity,
        }
    }

    /// The button under `point` (surface coordinates), if any.
    #[must_use]
    pub fn button_at(&self, point: Point) -> Option<Button> {
        if !self.is_showing() {
            return None;
        }
        let frame = self.appearance().frame;
        let local = point - Vector::new(frame.x, frame.y);
        let inside = |rect: Option<Rectangle>| rect.is_some_and(|rect| rect.contains(local));

        if self.content.closeable && inside(self.layout.close_button) {
            Some(Button::Close)
        } else if self.content.cancelable && inside(self.layout.cancel_button) {
            Some(Button::Cancel)
        } else {
            None
        }
    }

    fn presented_origin(&self) -> Point {
        self.appearance().frame.position()
    }

    fn apply(&mut self, content: Content, limits: &Limits, measurer: &dyn TextMeasurer) {
        match &content.indicator {
            Indicator::Progress(value) => self.progress.set_progress(*value),
            Indicator::Icon(_) | Indicator::None => self.progress.set_progress(0.0),
        }
        self.relayout(&content, limits, measurer);
        self.content = content;
    }

    fn relayout(&mut self, content: &Content, limits: &Limits, measurer: &dyn TextMeasurer) {
        let input = LayoutInput {
            surface: self.surface.size,
            metrics: self.metrics,
            has_indicator: !matches!(content.indicator, Indicator::None),
            title: content.title.as_deref(),
            subtitle: content.subtitle.as_deref(),
            direction: content.direction,
            position: content.position,
            closeable: content.closeable,
            cancelable: content.cancelable,
        };
        self.layout = geometry::compute(&input, limits, measurer);
        if let Some(indicator) = self.layout.indicator {
            self.progress.set_bounds(indicator.size());
        }
        self.origin = resting_origin(
            content.position,
            self.layout.size,
            self.surface.size,
            self.metrics,
        );
    }
}

fn lerp_point(from: Point, to: Point, t: f32) -> Point {
    Point::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::environment::SurfaceId;
    use crate::view::geometry::ApproximateMeasurer;
    use crate::view::progress::Mode;
    use iced::Size;

    const SURFACE: Size = Size::new(390.0, 844.0);

    fn surface(id: u64) -> Surface {
        Surface::new(SurfaceId(id), SURFACE)
    }

    fn content(position: Position, progress: f32) -> Content {
        Content {
            indicator: Indicator::Progress(progress),
            title: Some("Loading".into()),
            position,
            ..Content::default()
        }
    }

    fn view(position: Position) -> OverlayView {
        OverlayView::new(
            TaskId::new(),
            content(position, 0.3),
            surface(0),
            Metrics {
                status_bar_height: 47.0,
                bottom_inset: 34.0,
            },
            &Limits::from(&Config::default()),
            &ApproximateMeasurer::default(),
        )
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_view_is_detached_offscreen() {
        let view = view(Position::Top);
        assert_eq!(view.phase(), Phase::Detached);
        assert_eq!(view.presence(), 0.0);
        assert_eq!(view.appearance().frame.y, -view.layout().size.height);
    }

    #[test]
    fn enter_then_exit_cycle() {
        let start = Instant::now();
        let mut view = view(Position::Top);

        assert!(view.begin_enter(ms(300)));
        assert!(!view.begin_enter(ms(300)));
        assert_eq!(view.tick(start), None);
        assert_eq!(view.phase(), Phase::Entering);
        assert_eq!(view.tick(start + ms(300)), Some(ViewEvent::Shown));
        assert_eq!(view.phase(), Phase::Visible);
        assert_eq!(view.appearance().frame.y, 47.0);

        assert!(view.begin_exit(ms(300), true));
        assert!(!view.begin_exit(ms(300), true));
        view.tick(start + ms(400));
        assert_eq!(
            view.tick(start + ms(700)),
            Some(ViewEvent::Hidden { auto_next: true })
        );
        assert_eq!(view.phase(), Phase::Detached);
    }

    #[test]
    fn centered_view_scales_and_fades_in() {
        let start = Instant::now();
        let mut view = view(Position::Center);
        view.begin_enter(ms(300));
        view.tick(start);

        let appearance = view.appearance();
        assert_eq!(appearance.scale, OFFSCREEN_SCALE);
        assert_eq!(appearance.opacity, 0.0);
        assert_eq!(appearance.frame.position(), view.frame().position());

        view.tick(start + ms(300));
        assert_eq!(view.appearance().scale, 1.0);
        assert_eq!(view.appearance().opacity, 1.0);
    }

    #[test]
    fn exit_during_entrance_leaves_from_current_presence() {
        let start = Instant::now();
        let mut view = view(Position::Center);
        view.begin_enter(ms(300));
        view.tick(start);
        view.tick(start + ms(100));
        let entered = view.presence();
        assert!(entered > 0.0 && entered < 1.0);

        assert!(view.begin_exit(ms(300), true));
        assert!((view.presence() - entered).abs() < 1e-6);
        assert!(view.appearance().opacity <= entered);

        let mut previous = view.presence();
        for step in 0..=30 {
            view.tick(start + ms(100 + step * 10));
            let presence = view.presence();
            assert!(presence <= previous, "presence rose to {presence}");
            previous = presence;
        }
        assert_eq!(view.phase(), Phase::Detached);
    }

    #[test]
    fn zero_duration_settles_without_tick() {
        let mut view = view(Position::Bottom);
        view.begin_enter(Duration::ZERO);
        assert_eq!(view.settle(), Some(ViewEvent::Shown));
        assert_eq!(view.phase(), Phase::Visible);
    }

    #[test]
    fn update_keeps_visible_view_visible() {
        let start = Instant::now();
        let mut view = view(Position::Center);
        view.begin_enter(Duration::ZERO);
        view.settle();
        view.arm_auto_hide(Duration::from_secs(3));

        view.update(
            content(Position::Center, 0.6),
            surface(0),
            Metrics::default(),
            &Limits::from(&Config::default()),
            &ApproximateMeasurer::default(),
            ms(300),
        );

        assert_eq!(view.phase(), Phase::Visible);
        assert!(!view.has_pending_timer());
        assert_eq!(view.progress().mode(), Mode::Determinate(0.6));
        assert_eq!(view.presence(), 1.0);

        view.tick(start);
        assert_eq!(view.tick(start + ms(300)), Some(ViewEvent::Shown));
        assert_eq!(view.phase(), Phase::Visible);
    }

    #[test]
    fn update_onto_other_surface_replays_entrance() {
        let mut view = view(Position::Center);
        view.begin_enter(Duration::ZERO);
        view.settle();

        view.update(
            content(Position::Center, 0.6),
            surface(9),
            Metrics::default(),
            &Limits::from(&Config::default()),
            &ApproximateMeasurer::default(),
            ms(300),
        );
        assert_eq!(view.phase(), Phase::Entering);
    }

    #[test]
    fn auto_hide_fires_only_when_visible() {
        let start = Instant::now();
        let mut view = view(Position::Top);
        view.begin_enter(Duration::ZERO);
        view.settle();
        view.arm_auto_hide(Duration::from_secs(3));

        assert_eq!(view.tick(start), None);
        assert_eq!(
            view.tick(start + Duration::from_secs(3)),
            Some(ViewEvent::AutoHide)
        );
    }

    #[test]
    fn buttons_are_hit_tested_in_surface_coordinates() {
        let mut view = OverlayView::new(
            TaskId::new(),
            Content {
                title: Some("Offline".into()),
                closeable: true,
                position: Position::Center,
                ..Content::default()
            },
            surface(0),
            Metrics::default(),
            &Limits::from(&Config::default()),
            &ApproximateMeasurer::default(),
        );
        let frame = view.frame();
        let close = Point::new(frame.x + frame.width - 10.0, frame.y + 10.0);

        assert_eq!(view.button_at(close), None);
        view.begin_enter(Duration::ZERO);
        view.settle();
        assert_eq!(view.button_at(close), Some(Button::Close));
        assert_eq!(view.button_at(Point::new(frame.x + 2.0, frame.y + 30.0)), None);
    }
}
