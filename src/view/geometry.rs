// SPDX-License-Identifier: MPL-2.0
//! Geometry engine: sizes an overlay card and places its elements.
//!
//! Everything here is a pure function of its inputs. Text is measured
//! through a [`TextMeasurer`] so hosts can plug in real font metrics.
//!
//! Layout rules:
//!
//! - Bar masks span the full surface width and are at least as tall as the
//!   bar they cover plus the relevant safe-area inset.
//! - Free-floating cards clamp their width to `[min_width, max_width]` and
//!   their height to at least `min_height`. Wrapped text forces the maximum
//!   width.
//! - Horizontal layouts center the shorter of the icon and text columns
//!   against the taller one.

use crate::config::{
    Config, CANCEL_BUTTON_HEIGHT, CLOSE_BUTTON_SIZE, CONTENT_PADDING, CORNER_RADIUS,
    ELEMENT_SPACING, INDICATOR_SIZE, NAVIGATION_BAR_HEIGHT, TAB_BAR_HEIGHT,
    WRAPPED_LINE_THRESHOLD,
};
use crate::environment::Metrics;
use crate::ui::design_tokens::typography;
use iced::{Point, Rectangle, Size};

/// Anchor slot on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    Top,
    #[default]
    Center,
    Bottom,
    /// Full-width bar covering the status and navigation bars.
    NavigationBarMask,
    /// Full-width bar covering the tab bar and bottom inset.
    TabBarMask,
}

impl Position {
    #[must_use]
    pub fn is_bar_mask(self) -> bool {
        matches!(self, Position::NavigationBarMask | Position::TabBarMask)
    }
}

/// Arrangement of the indicator relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Indicator above text, centered.
    #[default]
    Vertical,
    /// Indicator left of text, left aligned.
    Horizontal,
}

/// A measured, wrapped block of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub size: Size,
    pub line_height: f32,
}

impl TextBlock {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Measures and wraps text for a font size within a bounding size.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32, bounds: Size) -> TextBlock;
}

/// Font-agnostic measurer using average glyph metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub glyph_width: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

impl Default for ApproximateMeasurer {
    fn default() -> Self {
        Self {
            glyph_width: 0.55,
            line_height: 1.25,
        }
    }
}

impl ApproximateMeasurer {
    fn width_of(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.glyph_width
    }
}

impl TextMeasurer for ApproximateMeasurer {
    fn measure(&self, text: &str, font_size: f32, bounds: Size) -> TextBlock {
        let line_height = (font_size * self.line_height).ceil();
        let glyph = font_size * self.glyph_width;
        let max_width = bounds.width.max(glyph);
        let max_lines = ((bounds.height / line_height).floor() as usize).max(1);

        let mut lines: Vec<String> = Vec::new();
        for paragraph in text.split('\n') {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                let candidate = if line.is_empty() {
                    word.to_string()
                } else {
                    format!("{line} {word}")
                };
                if self.width_of(&candidate, font_size) <= max_width || line.is_empty() {
                    line = candidate;
                } else {
                    lines.push(std::mem::take(&mut line));
                    line = word.to_string();
                }
                // Break words that are wider than a whole line.
                while self.width_of(&line, font_size) > max_width {
                    let fit = ((max_width / glyph).floor() as usize).max(1);
                    let head: String = line.chars().take(fit).collect();
                    let tail: String = line.chars().skip(fit).collect();
                    lines.push(head);
                    line = tail;
                }
            }
            lines.push(line);
        }
        while lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines.truncate(max_lines);

        let widest = lines
            .iter()
            .map(|line| self.width_of(line, font_size))
            .fold(0.0_f32, f32::max);

        TextBlock {
            size: Size::new(widest.ceil(), lines.len() as f32 * line_height),
            lines,
            line_height,
        }
    }
}

/// Sizing limits read from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
    pub cancel_button_min_width: f32,
}

impl From<&Config> for Limits {
    fn from(config: &Config) -> Self {
        Self {
            min_width: config.min_width,
            min_height: config.min_height,
            max_width: config.max_width,
            max_height: config.max_height,
            cancel_button_min_width: config.cancel_button_min_width,
        }
    }
}

/// Everything the layout depends on.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    pub surface: Size,
    pub metrics: Metrics,
    pub has_indicator: bool,
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
    pub direction: Direction,
    pub position: Position,
    pub closeable: bool,
    pub cancelable: bool,
}

/// Card size and element frames, relative to the card origin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub size: Size,
    pub corner_radius: f32,
    pub indicator: Option<Rectangle>,
    pub title: Option<Rectangle>,
    pub subtitle: Option<Rectangle>,
    pub close_button: Option<Rectangle>,
    pub cancel_button: Option<Rectangle>,
    pub title_text: TextBlock,
    pub subtitle_text: TextBlock,
}

/// Computes the card layout.
pub fn compute(input: &LayoutInput<'_>, limits: &Limits, measurer: &dyn TextMeasurer) -> Layout {
    let sized = match input.direction {
        Direction::Vertical => size_vertical(input, limits, measurer),
        Direction::Horizontal => size_horizontal(input, limits, measurer),
    };

    let height = match input.position {
        Position::NavigationBarMask => sized
            .height
            .max(input.metrics.status_bar_height + NAVIGATION_BAR_HEIGHT),
        Position::TabBarMask => sized.height.max(input.metrics.bottom_inset + TAB_BAR_HEIGHT),
        _ => sized.height.max(limits.min_height),
    };
    let size = Size::new(sized.width, height);

    place(input, limits, sized, size)
}

/// Intermediate result of the sizing pass.
#[derive(Debug, Clone)]
struct Sized {
    width: f32,
    height: f32,
    origin: Point,
    title: TextBlock,
    subtitle: TextBlock,
}

/// Inset at the top of a bar mask, and the one counted into its height.
fn bar_insets(input: &LayoutInput<'_>) -> (f32, f32) {
    match input.position {
        Position::NavigationBarMask => (
            input.metrics.status_bar_height,
            input.metrics.status_bar_height,
        ),
        Position::TabBarMask => (0.0, input.metrics.bottom_inset),
        _ => (0.0, 0.0),
    }
}

/// Height budget for each text block.
fn text_height_budget(input: &LayoutInput<'_>, limits: &Limits, vertical: bool) -> f32 {
    let mut budget = limits.max_height - 2.0 * CONTENT_PADDING;
    if vertical {
        if input.has_indicator {
            budget -= INDICATOR_SIZE + ELEMENT_SPACING;
        }
        if input.cancelable {
            budget -= CANCEL_BUTTON_HEIGHT + ELEMENT_SPACING;
        }
    }
    if input.title.is_some() && input.subtitle.is_some() {
        budget = (budget - ELEMENT_SPACING) / 2.0;
    }
    budget.max(0.0)
}

fn measure(
    measurer: &dyn TextMeasurer,
    text: Option<&str>,
    font_size: f32,
    bounds: Size,
) -> TextBlock {
    text.map(|text| measurer.measure(text, font_size, bounds))
        .unwrap_or_default()
}

fn size_vertical(input: &LayoutInput<'_>, limits: &Limits, measurer: &dyn TextMeasurer) -> Sized {
    let budget = text_height_budget(input, limits, true);

    if input.position.is_bar_mask() {
        let (top, counted) = bar_insets(input);
        let width = input.surface.width;
        let mut height = counted + CONTENT_PADDING;
        let bounds = Size::new(width - 2.0 * CONTENT_PADDING, budget);

        if input.has_indicator {
            height += INDICATOR_SIZE;
        }
        let title = measure(measurer, input.title, typography::TITLE, bounds);
        if input.title.is_some() {
            height += ELEMENT_SPACING + title.size.height;
        }
        let subtitle = measure(measurer, input.subtitle, typography::SUBTITLE, bounds);
        if input.subtitle.is_some() {
            height += ELEMENT_SPACING + subtitle.size.height;
        }
        if input.cancelable {
            height += ELEMENT_SPACING + CANCEL_BUTTON_HEIGHT;
        }
        height += CONTENT_PADDING;

        return Sized {
            width,
            height,
            origin: Point::new(CONTENT_PADDING, top + CONTENT_PADDING),
            title,
            subtitle,
        };
    }

    let text_width = limits.max_width - 2.0 * CONTENT_PADDING;
    let bounds = Size::new(text_width, budget);
    let mut content_width = limits.min_width - 2.0 * CONTENT_PADDING;
    let mut height = CONTENT_PADDING;

    if input.has_indicator {
        height += INDICATOR_SIZE;
    }

    let title = measure(measurer, input.title, typography::TITLE, bounds);
    if input.title.is_some() {
        if input.has_indicator {
            height += ELEMENT_SPACING;
        }
        height += title.size.height;
        content_width = widen(content_width, title.size, text_width);
    }

    let subtitle = measure(measurer, input.subtitle, typography::SUBTITLE, bounds);
    if input.subtitle.is_some() {
        if input.title.is_some() || input.has_indicator {
            height += ELEMENT_SPACING;
        }
        height += subtitle.size.height;
        content_width = widen(content_width, subtitle.size, text_width);
    }

    if input.cancelable {
        height += ELEMENT_SPACING + CANCEL_BUTTON_HEIGHT;
    }

    let width = (content_width + 2.0 * CONTENT_PADDING).clamp(limits.min_width, limits.max_width);
    Sized {
        width,
        height: height + CONTENT_PADDING,
        origin: Point::new(CONTENT_PADDING, CONTENT_PADDING),
        title,
        subtitle,
    }
}

/// Widens the content to fit `text`, or to the maximum when it wrapped.
fn widen(current: f32, text: Size, max: f32) -> f32 {
    if text.height > WRAPPED_LINE_THRESHOLD {
        max
    } else {
        current.max(text.width)
    }
}

fn size_horizontal(
    input: &LayoutInput<'_>,
    limits: &Limits,
    measurer: &dyn TextMeasurer,
) -> Sized {
    let budget = text_height_budget(input, limits, false);
    let bar = input.position.is_bar_mask();

    let mut text_width = if bar {
        input.surface.width - 2.0 * CONTENT_PADDING
    } else {
        limits.max_width - 2.0 * CONTENT_PADDING
    };
    let mut columns: Vec<f32> = Vec::new();
    let mut icon_height: f32 = 0.0;

    if input.has_indicator {
        icon_height = INDICATOR_SIZE;
        text_width -= INDICATOR_SIZE + ELEMENT_SPACING;
        columns.push(INDICATOR_SIZE);
    }
    if input.cancelable {
        icon_height = CANCEL_BUTTON_HEIGHT;
        text_width -= limits.cancel_button_min_width + ELEMENT_SPACING;
    }

    let bounds = Size::new(text_width.max(0.0), budget);
    let title = measure(measurer, input.title, typography::TITLE, bounds);
    let subtitle = measure(measurer, input.subtitle, typography::SUBTITLE, bounds);

    let mut text_height = title.size.height;
    if !subtitle.is_empty() {
        if title.size.height > 0.0 {
            text_height += ELEMENT_SPACING;
        }
        text_height += subtitle.size.height;
    }
    let text_column = title.size.width.max(subtitle.size.width);
    if text_column > 0.0 {
        columns.push(text_column);
    }
    if input.cancelable {
        columns.push(limits.cancel_button_min_width);
    }

    let (top, counted) = bar_insets(input);
    let mut origin = Point::new(CONTENT_PADDING, top + CONTENT_PADDING);
    if icon_height > text_height {
        origin.y += (icon_height - text_height) * 0.5;
    }
    let height = counted + 2.0 * CONTENT_PADDING + icon_height.max(text_height);

    if bar {
        return Sized {
            width: input.surface.width,
            height,
            origin,
            title,
            subtitle,
        };
    }

    let gaps = columns.len().saturating_sub(1) as f32 * ELEMENT_SPACING;
    let content = columns.iter().sum::<f32>() + gaps;
    let natural = content + 2.0 * CONTENT_PADDING;
    let width = natural.clamp(limits.min_width, limits.max_width);
    if natural < width {
        origin.x += (width - natural) * 0.5;
    }

    Sized {
        width,
        height,
        origin,
        title,
        subtitle,
    }
}

/// Places each element inside a card of the final `size`.
fn place(input: &LayoutInput<'_>, limits: &Limits, sized: Sized, size: Size) -> Layout {
    let metrics = input.metrics;
    let mut origin = sized.origin;
    let icon = Size::new(INDICATOR_SIZE, INDICATOR_SIZE);

    // Vertical center of side-by-side elements, inside the uncovered area.
    let row_center_y = |element: f32| match input.position {
        Position::NavigationBarMask => {
            metrics.status_bar_height + (size.height - metrics.status_bar_height - element) * 0.5
        }
        Position::TabBarMask => (size.height - metrics.bottom_inset - element) * 0.5,
        _ => (size.height - element) * 0.5,
    };

    let indicator = input.has_indicator.then(|| match input.direction {
        Direction::Vertical => {
            let frame = Rectangle::new(Point::new((size.width - icon.width) * 0.5, origin.y), icon);
            origin.y += INDICATOR_SIZE + ELEMENT_SPACING;
            frame
        }
        Direction::Horizontal => {
            let frame = Rectangle::new(Point::new(origin.x, row_center_y(icon.height)), icon);
            origin.x += INDICATOR_SIZE + ELEMENT_SPACING;
            frame
        }
    });

    let mut place_text = |block: &TextBlock| -> Option<Rectangle> {
        if block.is_empty() {
            return None;
        }
        let x = match input.direction {
            Direction::Vertical => (size.width - block.size.width) * 0.5,
            Direction::Horizontal => origin.x,
        };
        let frame = Rectangle::new(Point::new(x, origin.y), block.size);
        origin.y += block.size.height + ELEMENT_SPACING;
        Some(frame)
    };
    let title = place_text(&sized.title);
    let subtitle = place_text(&sized.subtitle);

    let close_button = input.closeable.then(|| {
        let y = if input.position == Position::NavigationBarMask {
            metrics.status_bar_height
        } else {
            0.0
        };
        Rectangle::new(
            Point::new(size.width - CLOSE_BUTTON_SIZE, y),
            Size::new(CLOSE_BUTTON_SIZE, CLOSE_BUTTON_SIZE),
        )
    });

    let cancel_button = input.cancelable.then(|| match input.direction {
        Direction::Vertical => Rectangle::new(
            Point::new(CONTENT_PADDING, origin.y),
            Size::new(size.width - 2.0 * CONTENT_PADDING, CANCEL_BUTTON_HEIGHT),
        ),
        Direction::Horizontal => Rectangle::new(
            Point::new(
                size.width - limits.cancel_button_min_width - CONTENT_PADDING,
                row_center_y(CANCEL_BUTTON_HEIGHT),
            ),
            Size::new(limits.cancel_button_min_width, CANCEL_BUTTON_HEIGHT),
        ),
    });

    // A lone indicator sits in the middle of the card.
    let indicator = match (indicator, title, subtitle, cancel_button) {
        (Some(frame), None, None, None) if input.direction == Direction::Horizontal => Some(
            Rectangle::new(Point::new((size.width - icon.width) * 0.5, frame.y), icon),
        ),
        (indicator, ..) => indicator,
    };

    Layout {
        size,
        corner_radius: if input.position.is_bar_mask() {
            0.0
        } else {
            CORNER_RADIUS
        },
        indicator,
        title,
        subtitle,
        close_button,
        cancel_button,
        title_text: sized.title,
        subtitle_text: sized.subtitle,
    }
}

/// Card origin once it has come to rest on `surface`.
#[must_use]
pub fn resting_origin(position: Position, card: Size, surface: Size, metrics: Metrics) -> Point {
    let centered_x = (surface.width - card.width) * 0.5;
    match position {
        Position::Top => Point::new(centered_x, metrics.status_bar_height),
        Position::Center => Point::new(centered_x, (surface.height - card.height) * 0.5),
        Position::Bottom => Point::new(
            centered_x,
            surface.height - card.height - metrics.bottom_inset - crate::config::BOTTOM_MARGIN,
        ),
        Position::NavigationBarMask => Point::ORIGIN,
        Position::TabBarMask => Point::new(0.0, surface.height - card.height),
    }
}

/// Card origin while off screen. Centered cards do not move; they scale.
#[must_use]
pub fn offscreen_origin(position: Position, card: Size, surface: Size, metrics: Metrics) -> Point {
    let rest = resting_origin(position, card, surface, metrics);
    match position {
        Position::Top | Position::NavigationBarMask => Point::new(rest.x, -card.height),
        Position::Bottom | Position::TabBarMask => Point::new(rest.x, surface.height),
        Position::Center => rest,
    }
}
