// SPDX-License-Identifier: MPL-2.0
//! Visual state of the HUD: card geometry, transitions, the progress
//! indicator and the shared backdrop.
//!
//! Nothing in here draws. The [`crate::ui`] layer reads these types and
//! paints them on a canvas.

pub mod animation;
pub mod backdrop;
pub mod geometry;
pub mod overlay;
pub mod progress;
pub mod timer;

pub use backdrop::Backdrop;
pub use geometry::{
    ApproximateMeasurer, Direction, Layout, Limits, Position, TextBlock, TextMeasurer,
};
pub use overlay::{Appearance, Button, Content, Icon, Indicator, OverlayView, Phase, ViewEvent};
pub use progress::{ProgressIndicator, INDETERMINATE};
