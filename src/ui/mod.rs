// SPDX-License-Identifier: MPL-2.0
//! Rendering of the HUD on an iced canvas.
//!
//! - [`layer`] - The full-surface canvas: backdrop, cards, buttons, clicks
//! - [`spinner`] - Circular progress indicator drawing
//! - [`design_tokens`] - Colors, font sizes and stroke widths

pub mod design_tokens;
pub mod layer;
pub mod spinner;
