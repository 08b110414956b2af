// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, font sizes and stroke widths used to paint the HUD.

## Organization

- **Palette**: Base colors and the card materials
- **Opacity**: Standardized opacity levels
- **Typography**: Font sizes of the card texts
- **Stroke**: Line widths

Card sizes and spacing live in [`crate::config`], next to the limits the
host can override.

## Examples

```
use iced_hud::ui::design_tokens::{palette, opacity};
use iced::Color;

let dimmed = Color {
    a: opacity::SUBTITLE,
    ..palette::WHITE
};
assert!(dimmed.a < 1.0);
```
"#]

use crate::config::ContentStyle;
use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Foreground of light cards.
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2);

    /// Stand-in for the dark blur material.
    pub const MATERIAL_DARK: Color = Color::from_rgba(0.11, 0.11, 0.12, 0.86);
    /// Stand-in for the extra-light blur material.
    pub const MATERIAL_LIGHT: Color = Color::from_rgba(0.97, 0.97, 0.97, 0.92);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Subtitle text relative to the title.
    pub const SUBTITLE: f32 = 0.7;
    /// Fill of the cancel button.
    pub const CANCEL_FILL: f32 = 0.15;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 16.0;
    pub const SUBTITLE: f32 = 14.0;
    pub const BUTTON: f32 = 16.0;
}

// ============================================================================
// Stroke Widths
// ============================================================================

pub mod stroke {
    /// Strokes of the close glyph.
    pub const GLYPH: f32 = 2.0;
    /// Inset of the close glyph inside its 40×40 hit area.
    pub const GLYPH_INSET: f32 = 14.0;
}

/// Foreground and material colors of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColors {
    /// Translucent material painted over the card background, if any.
    pub material: Option<Color>,
    pub title: Color,
    pub subtitle: Color,
    pub tint: Color,
}

/// Colors of a card in `style`.
#[must_use]
pub fn card_colors(style: ContentStyle, translucent: bool) -> CardColors {
    let (material, foreground) = match style {
        ContentStyle::Dark => (palette::MATERIAL_DARK, palette::WHITE),
        ContentStyle::Light => (palette::MATERIAL_LIGHT, palette::GRAY_800),
    };
    CardColors {
        material: translucent.then_some(material),
        title: foreground,
        subtitle: Color {
            a: opacity::SUBTITLE,
            ..foreground
        },
        tint: foreground,
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SUBTITLE > 0.0 && opacity::SUBTITLE < 1.0);
    assert!(typography::TITLE > typography::SUBTITLE);
    assert!(stroke::GLYPH_INSET * 2.0 < crate::config::CLOSE_BUTTON_SIZE);
};
