// SPDX-License-Identifier: MPL-2.0
//! Shared dimming backdrop behind visible overlays.

use crate::environment::Surface;
use iced::Color;

/// Full-surface scrim. Created on the first show, dropped once the last
/// overlay has finished hiding.
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    surface: Surface,
    color: Color,
    blocks_input: bool,
    opacity: f32,
}

impl Backdrop {
    /// Creates a transparent backdrop. `interactive` lets clicks through.
    #[must_use]
    pub fn new(surface: Surface, color: Color, interactive: bool) -> Self {
        Self {
            surface,
            color,
            blocks_input: !interactive,
            opacity: 0.0,
        }
    }

    /// Re-targets the backdrop for a newly shown task.
    pub fn attach(&mut self, surface: Surface, color: Color, interactive: bool) {
        self.surface = surface;
        self.color = color;
        self.blocks_input = !interactive;
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.blocks_input = !interactive;
    }

    /// Sets how far the dim color is faded in, from 0 to 1.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    #[must_use]
    pub fn blocks_input(&self) -> bool {
        self.blocks_input
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Color to paint right now.
    #[must_use]
    pub fn presented_color(&self) -> Color {
        Color {
            a: self.color.a * self.opacity,
            ..self.color
        }
    }
}
