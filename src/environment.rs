// SPDX-License-Identifier: MPL-2.0
//! Host collaborators queried by the HUD.
//!
//! The HUD never owns windows. It asks an [`Environment`] for the surface to
//! attach to and for the safe-area metrics that shape bar masks, and it asks
//! a [`Haptics`] implementation to play feedback when a status toast appears.

use crate::config::FALLBACK_STATUS_BAR_HEIGHT;
use crate::error::{Error, Result};
use crate::hud::Status;
use iced::Size;

/// Identifier of an anchor surface (usually a window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// An area overlays are attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub id: SurfaceId,
    pub size: Size,
}

impl Surface {
    #[must_use]
    pub fn new(id: SurfaceId, size: Size) -> Self {
        Self { id, size }
    }
}

/// A window as listed by the host, in the host's order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub surface: Surface,
    pub is_key: bool,
}

/// Safe-area insets of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Read-only host queries used for anchoring and geometry.
pub trait Environment {
    /// All windows, in the order the host lists them.
    fn windows(&self) -> Vec<Window>;

    /// The window the host currently treats as key, if it tracks one separately.
    fn key_window(&self) -> Option<Surface> {
        None
    }

    /// The application's main window, used as the last resort.
    fn delegate_window(&self) -> Option<Surface> {
        None
    }

    fn safe_area(&self, surface: &Surface) -> Insets;

    /// Height of the status bar as reported by the platform, when known.
    fn status_bar_frame_height(&self) -> Option<f32> {
        None
    }

    fn orientation(&self) -> Orientation {
        Orientation::Portrait
    }

    /// Called when the host window is resized.
    fn resize(&mut self, _size: Size) {}
}

/// Finds the surface an overlay should attach to.
///
/// An explicit surface is only honoured for centered overlays; edge and bar
/// positions always anchor to the key window.
pub fn resolve_anchor(
    environment: &dyn Environment,
    explicit: Option<Surface>,
    centered: bool,
) -> Result<Surface> {
    if centered {
        if let Some(surface) = explicit {
            return Ok(surface);
        }
    }
    key_surface(environment).ok_or(Error::NoAnchor)
}

/// The key surface, walking the host's fallbacks in order.
pub fn key_surface(environment: &dyn Environment) -> Option<Surface> {
    if let Some(first) = environment.windows().first() {
        if first.is_key {
            return Some(first.surface);
        }
    }
    if let Some(surface) = environment.key_window() {
        return Some(surface);
    }
    let surface = environment.delegate_window();
    if surface.is_none() {
        tracing::warn!("no key window available for HUD");
    }
    surface
}

/// Safe-area metrics the geometry engine needs for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub status_bar_height: f32,
    pub bottom_inset: f32,
}

impl Metrics {
    #[must_use]
    pub fn query(environment: &dyn Environment, surface: &Surface) -> Self {
        Self {
            status_bar_height: status_bar_height(environment, surface),
            bottom_inset: bottom_inset(environment, surface),
        }
    }
}

/// Status bar height, zero in landscape, never zero in portrait.
pub fn status_bar_height(environment: &dyn Environment, surface: &Surface) -> f32 {
    if environment.orientation() == Orientation::Landscape {
        return 0.0;
    }
    let mut height = environment.safe_area(surface).top;
    if height <= 0.0 {
        height = environment
            .status_bar_frame_height()
            .unwrap_or(FALLBACK_STATUS_BAR_HEIGHT);
    }
    if height <= 0.0 {
        height = FALLBACK_STATUS_BAR_HEIGHT;
    }
    height
}

/// Bottom safe-area inset, zero in landscape.
pub fn bottom_inset(environment: &dyn Environment, surface: &Surface) -> f32 {
    if environment.orientation() == Orientation::Landscape {
        return 0.0;
    }
    environment.safe_area(surface).bottom.max(0.0)
}

/// Single-window environment, suitable for an iced application window.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    surface: Surface,
    insets: Insets,
    orientation: Orientation,
    status_bar: Option<f32>,
}

impl StaticEnvironment {
    pub const MAIN: SurfaceId = SurfaceId(0);

    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            surface: Surface::new(Self::MAIN, size),
            insets: Insets::default(),
            orientation: Orientation::Portrait,
            status_bar: None,
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_status_bar_height(mut self, height: f32) -> Self {
        self.status_bar = Some(height);
        self
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }
}

impl Environment for StaticEnvironment {
    fn windows(&self) -> Vec<Window> {
        vec![Window {
            surface: self.surface,
            is_key: true,
        }]
    }

    fn safe_area(&self, _surface: &Surface) -> Insets {
        self.insets
    }

    fn status_bar_frame_height(&self) -> Option<f32> {
        self.status_bar
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn resize(&mut self, size: Size) {
        self.surface.size = size;
    }
}

/// Notification feedback patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Warning,
    Error,
    Success,
}

impl Feedback {
    /// The pattern played for a status, `None` for plain toasts.
    #[must_use]
    pub fn for_status(status: Status) -> Option<Self> {
        match status {
            Status::None => None,
            Status::Warning => Some(Feedback::Warning),
            Status::Error => Some(Feedback::Error),
            Status::Success => Some(Feedback::Success),
        }
    }
}

/// Plays haptic feedback on the device.
pub trait Haptics {
    fn notification_occurred(&self, feedback: Feedback);
}

/// Haptics for hosts without a haptic engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn notification_occurred(&self, _feedback: Feedback) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Headless {
        windows: Vec<Window>,
        key: Option<Surface>,
        delegate: Option<Surface>,
    }

    impl Environment for Headless {
        fn windows(&self) -> Vec<Window> {
            self.windows.clone()
        }

        fn key_window(&self) -> Option<Surface> {
            self.key
        }

        fn delegate_window(&self) -> Option<Surface> {
            self.delegate
        }

        fn safe_area(&self, _surface: &Surface) -> Insets {
            Insets::default()
        }
    }

    fn surface(id: u64) -> Surface {
        Surface::new(SurfaceId(id), Size::new(390.0, 844.0))
    }

    #[test]
    fn explicit_surface_only_used_when_centered() {
        let env = StaticEnvironment::new(Size::new(390.0, 844.0));
        let explicit = surface(7);

        assert_eq!(resolve_anchor(&env, Some(explicit), true), Ok(explicit));
        assert_eq!(
            resolve_anchor(&env, Some(explicit), false),
            Ok(env.surface())
        );
    }

    #[test]
    fn anchor_falls_back_through_key_and_delegate_windows() {
        let mut env = Headless {
            windows: vec![Window {
                surface: surface(1),
                is_key: false,
            }],
            key: Some(surface(2)),
            delegate: Some(surface(3)),
        };
        assert_eq!(key_surface(&env), Some(surface(2)));

        env.key = None;
        assert_eq!(key_surface(&env), Some(surface(3)));

        env.delegate = None;
        assert_eq!(resolve_anchor(&env, None, true), Err(Error::NoAnchor));
    }

    #[test]
    fn status_bar_height_falls_back_to_constant() {
        let env = StaticEnvironment::new(Size::new(390.0, 844.0));
        let s = env.surface();
        assert_eq!(status_bar_height(&env, &s), FALLBACK_STATUS_BAR_HEIGHT);

        let env = env.with_status_bar_height(0.0);
        assert_eq!(status_bar_height(&env, &s), FALLBACK_STATUS_BAR_HEIGHT);
    }

    #[test]
    fn status_bar_height_prefers_safe_area() {
        let env = StaticEnvironment::new(Size::new(390.0, 844.0)).with_insets(Insets {
            top: 47.0,
            bottom: 34.0,
            ..Insets::default()
        });
        let metrics = Metrics::query(&env, &env.surface());
        assert_eq!(metrics.status_bar_height, 47.0);
        assert_eq!(metrics.bottom_inset, 34.0);
    }

    #[test]
    fn landscape_has_no_insets() {
        let env = StaticEnvironment::new(Size::new(844.0, 390.0))
            .with_insets(Insets {
                top: 47.0,
                bottom: 34.0,
                ..Insets::default()
            })
            .with_orientation(Orientation::Landscape);
        let metrics = Metrics::query(&env, &env.surface());
        assert_eq!(metrics, Metrics::default());
    }

    #[test]
    fn feedback_follows_status() {
        assert_eq!(Feedback::for_status(Status::None), None);
        assert_eq!(
            Feedback::for_status(Status::Success),
            Some(Feedback::Success)
        );
        assert_eq!(Feedback::for_status(Status::Error), Some(Feedback::Error));
    }
}
