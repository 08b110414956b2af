// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the HUD. Constants are organized by category.
//!
//! # Categories
//!
//! - **Sizing**: Card width/height bounds and fixed element sizes
//! - **Spacing**: Internal spacing and outer padding of cards
//! - **Bars**: Minimum heights of the bar masks and inset fallbacks
//! - **Timing**: Auto-hide and transition durations
//! - **Progress**: Indicator stroke lengths and line widths

use std::time::Duration;

// ==========================================================================
// Sizing Defaults
// ==========================================================================

/// Minimum width of a free-floating card.
pub const DEFAULT_MIN_WIDTH: f32 = 120.0;

/// Minimum height of a free-floating card.
pub const DEFAULT_MIN_HEIGHT: f32 = 49.0;

/// Maximum width of a free-floating card.
pub const DEFAULT_MAX_WIDTH: f32 = 280.0;

/// Maximum height budget used when measuring text.
pub const DEFAULT_MAX_HEIGHT: f32 = 240.0;

/// Minimum width of the cancel button in horizontal layouts.
pub const DEFAULT_CANCEL_BUTTON_MIN_WIDTH: f32 = 62.0;

/// Side of the square icon / progress indicator slot.
pub const INDICATOR_SIZE: f32 = 40.0;

/// Side of the square close button.
pub const CLOSE_BUTTON_SIZE: f32 = 40.0;

/// Height of the cancel button.
pub const CANCEL_BUTTON_HEIGHT: f32 = 40.0;

/// A measured text line taller than this has wrapped.
pub const WRAPPED_LINE_THRESHOLD: f32 = 24.0;

// ==========================================================================
// Spacing Defaults
// ==========================================================================

/// Spacing between stacked elements inside a card.
pub const ELEMENT_SPACING: f32 = 8.0;

/// Outer padding of a card.
pub const CONTENT_PADDING: f32 = 16.0;

/// Corner radius of free-floating cards.
pub const CORNER_RADIUS: f32 = 8.0;

/// Distance kept between a bottom card and the tab bar area.
pub const BOTTOM_MARGIN: f32 = 57.0;

// ==========================================================================
// Bar Defaults
// ==========================================================================

/// Minimum content height of the navigation-bar mask (below the status bar).
pub const NAVIGATION_BAR_HEIGHT: f32 = 44.0;

/// Minimum content height of the tab-bar mask (above the bottom inset).
pub const TAB_BAR_HEIGHT: f32 = 49.0;

/// Status bar height used when the environment cannot report one.
pub const FALLBACK_STATUS_BAR_HEIGHT: f32 = 20.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-hide delay of status toasts (in seconds).
pub const DEFAULT_DURATION_SECS: f64 = 3.0;

/// Duration of enter/exit/relayout transitions.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Scale applied to centered cards while off screen.
pub const OFFSCREEN_SCALE: f32 = 0.5;

// ==========================================================================
// Progress Defaults
// ==========================================================================

/// Shortest arc drawn by the indeterminate indicator (fraction of a turn).
pub const MIN_STROKE_LENGTH: f32 = 0.05;

/// Arc length added by each indeterminate pulse (fraction of a turn).
pub const MAX_STROKE_LENGTH: f32 = 0.7;

/// Width of the foreground arc.
pub const CIRCLE_LINE_WIDTH: f32 = 3.0;

/// Width of the background ring.
pub const CIRCLE_BACKGROUND_LINE_WIDTH: f32 = 5.0;

/// Duration of one full rotation of the indeterminate ring.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(2200);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Sizing validation
    assert!(DEFAULT_MIN_WIDTH > 0.0);
    assert!(DEFAULT_MAX_WIDTH >= DEFAULT_MIN_WIDTH);
    assert!(DEFAULT_MIN_HEIGHT > 0.0);
    assert!(DEFAULT_MAX_HEIGHT >= DEFAULT_MIN_HEIGHT);
    assert!(DEFAULT_MIN_WIDTH > 2.0 * CONTENT_PADDING);

    // Bar validation
    assert!(TAB_BAR_HEIGHT > NAVIGATION_BAR_HEIGHT);
    assert!(FALLBACK_STATUS_BAR_HEIGHT > 0.0);

    // Timing validation
    assert!(DEFAULT_DURATION_SECS > 0.0);
    assert!(OFFSCREEN_SCALE > 0.0 && OFFSCREEN_SCALE < 1.0);

    // Progress validation
    assert!(MIN_STROKE_LENGTH > 0.0);
    assert!(MIN_STROKE_LENGTH + MAX_STROKE_LENGTH <= 1.0);
    assert!(CIRCLE_BACKGROUND_LINE_WIDTH >= CIRCLE_LINE_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizing_defaults_are_valid() {
        assert_eq!(DEFAULT_MIN_WIDTH, 120.0);
        assert_eq!(DEFAULT_MAX_WIDTH, 280.0);
        assert!(DEFAULT_MIN_HEIGHT <= DEFAULT_MAX_HEIGHT);
    }

    #[test]
    fn transition_is_three_tenths_of_a_second() {
        assert_eq!(TRANSITION_DURATION.as_millis(), 300);
    }

    #[test]
    fn stroke_lengths_fit_in_one_turn() {
        assert!(MIN_STROKE_LENGTH + MAX_STROKE_LENGTH <= 1.0);
    }
}
