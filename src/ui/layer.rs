// SPDX-License-Identifier: MPL-2.0
//! The HUD layer: one canvas covering the host surface.
//!
//! Draws the backdrop and every attached card in z-order, turns clicks on
//! card buttons into [`Message::Close`] / [`Message::Cancel`], and swallows
//! clicks that land on a card or on a non-interactive backdrop.

use super::design_tokens::{card_colors, opacity, stroke, typography, CardColors};
use super::spinner::{self, faded};
use crate::assets::IconName;
use crate::hud::{Hud, Message, Task};
use crate::view::{Button, Indicator, TextBlock, TextMeasurer};
use iced::advanced::svg::Svg;
use iced::widget::canvas::{self, Action, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme, Vector};

const CANCEL_LABEL: &str = "Cancel";

/// Builds the HUD layer for `hud`.
pub fn view(hud: &Hud) -> Element<'_, Message> {
    Canvas::new(Layer { hud })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct Layer<'a> {
    hud: &'a Hud,
}

impl Layer<'_> {
    /// Whether a visible card covers `point`.
    fn covers(&self, point: Point) -> bool {
        self.hud.attached().any(|task| {
            task.view().is_showing() && task.view().appearance().frame.contains(point)
        })
    }
}

impl canvas::Program<Message> for Layer<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event else {
            return None;
        };
        let position = cursor.position_in(bounds)?;

        if let Some((id, button)) = self.hud.button_at(position) {
            let message = match button {
                Button::Close => Message::Close(id),
                Button::Cancel => Message::Cancel(id),
            };
            return Some(Action::publish(message).and_capture());
        }

        let blocked = self
            .hud
            .backdrop()
            .is_some_and(crate::view::Backdrop::blocks_input);
        if blocked || self.covers(position) {
            return Some(Action::capture());
        }
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(backdrop) = self.hud.backdrop() {
            let color = backdrop.presented_color();
            if color.a > 0.0 {
                frame.fill_rectangle(Point::ORIGIN, bounds.size(), color);
            }
        }

        let config = self.hud.config();
        let colors = card_colors(config.content_style, config.content_translucent);
        let background: Color = config.content_background_color.into();
        let close_icon = self.hud.icon(IconName::Close);

        for task in self.hud.attached() {
            let appearance = task.view().appearance();
            if appearance.opacity <= 0.0 {
                continue;
            }
            frame.with_save(|frame| {
                if (appearance.scale - 1.0).abs() > f32::EPSILON {
                    let center = appearance.frame.center();
                    frame.translate(Vector::new(center.x, center.y));
                    frame.scale(appearance.scale);
                    frame.translate(Vector::new(-center.x, -center.y));
                }
                draw_card(
                    frame,
                    task,
                    &Style {
                        colors,
                        background,
                        close_icon: close_icon.as_ref(),
                        measurer: self.hud.measurer(),
                        fade: appearance.opacity,
                    },
                    appearance.frame.position(),
                );
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(position) if self.hud.button_at(position).is_some() => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}

struct Style<'a> {
    colors: CardColors,
    background: Color,
    close_icon: Option<&'a iced::widget::svg::Handle>,
    measurer: &'a dyn TextMeasurer,
    fade: f32,
}

fn draw_card(frame: &mut Frame, task: &Task, style: &Style<'_>, origin: Point) {
    let view = task.view();
    let layout = view.layout();
    let content = view.content();
    let fade = style.fade;
    let offset = |rect: Rectangle| Rectangle::new(origin + Vector::new(rect.x, rect.y), rect.size());

    let card = if layout.corner_radius > 0.0 {
        Path::rounded_rectangle(origin, layout.size, layout.corner_radius.into())
    } else {
        Path::rectangle(origin, layout.size)
    };
    if style.background.a > 0.0 {
        frame.fill(&card, faded(style.background, fade));
    }
    if let Some(material) = style.colors.material {
        frame.fill(&card, faded(material, fade));
    }

    if let Some(slot) = layout.indicator.map(offset) {
        match &content.indicator {
            Indicator::Progress(_) => spinner::draw(frame, view.progress(), slot.position(), fade),
            Indicator::Icon(icon) => frame.draw_svg(
                slot,
                Svg::new(icon.handle.clone()).color(faded(style.colors.tint, fade)),
            ),
            Indicator::None => {}
        }
    }

    if let Some(rect) = layout.title.map(offset) {
        draw_lines(
            frame,
            &layout.title_text,
            rect.position(),
            typography::TITLE,
            faded(style.colors.title, fade),
        );
    }
    if let Some(rect) = layout.subtitle.map(offset) {
        // A lone subtitle takes the title color.
        let color = if content.title.is_some() {
            style.colors.subtitle
        } else {
            style.colors.title
        };
        draw_lines(
            frame,
            &layout.subtitle_text,
            rect.position(),
            typography::SUBTITLE,
            faded(color, fade),
        );
    }

    if let Some(rect) = layout.close_button.filter(|_| content.closeable).map(offset) {
        draw_close(frame, rect, style);
    }
    if let Some(rect) = layout.cancel_button.filter(|_| content.cancelable).map(offset) {
        draw_cancel(frame, rect, style);
    }
}

fn draw_lines(frame: &mut Frame, block: &TextBlock, origin: Point, size: f32, color: Color) {
    for (index, line) in block.lines.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = origin.y + index as f32 * block.line_height;
        frame.fill_text(Text {
            content: line.clone(),
            position: Point::new(origin.x, y),
            color,
            size: size.into(),
            ..Text::default()
        });
    }
}

fn draw_close(frame: &mut Frame, rect: Rectangle, style: &Style<'_>) {
    let color = faded(style.colors.tint, style.fade);
    if let Some(handle) = style.close_icon {
        frame.draw_svg(rect, Svg::new(handle.clone()).color(color));
        return;
    }

    let inset = stroke::GLYPH_INSET;
    let (left, top) = (rect.x + inset, rect.y + inset);
    let (right, bottom) = (rect.x + rect.width - inset, rect.y + rect.height - inset);
    let glyph = Path::new(|builder| {
        builder.move_to(Point::new(left, top));
        builder.line_to(Point::new(right, bottom));
        builder.move_to(Point::new(right, top));
        builder.line_to(Point::new(left, bottom));
    });
    frame.stroke(
        &glyph,
        Stroke::default()
            .with_width(stroke::GLYPH)
            .with_color(color)
            .with_line_cap(canvas::LineCap::Round),
    );
}

fn draw_cancel(frame: &mut Frame, rect: Rectangle, style: &Style<'_>) {
    let fill = Color {
        a: opacity::CANCEL_FILL,
        ..style.colors.tint
    };
    let radius = rect.height.min(rect.width) * 0.5;
    frame.fill(
        &Path::rounded_rectangle(rect.position(), rect.size(), radius.into()),
        faded(fill, style.fade),
    );

    frame.fill_text(Text {
        content: CANCEL_LABEL.to_string(),
        position: cancel_label_position(rect, style.measurer),
        color: faded(style.colors.tint, style.fade),
        size: typography::BUTTON.into(),
        ..Text::default()
    });
}

/// Top-left of the cancel label, centered in `rect`.
fn cancel_label_position(rect: Rectangle, measurer: &dyn TextMeasurer) -> Point {
    let label = measurer.measure(CANCEL_LABEL, typography::BUTTON, rect.size());
    Point::new(
        rect.center_x() - label.size.width * 0.5,
        rect.center_y() - label.size.height * 0.5,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    struct FixedMeasurer(Size);

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, text: &str, _font_size: f32, _bounds: Size) -> TextBlock {
            TextBlock {
                lines: vec![text.to_string()],
                size: self.0,
                line_height: self.0.height,
            }
        }
    }

    #[test]
    fn cancel_label_is_centered_with_the_given_measurer() {
        let rect = Rectangle::new(Point::new(10.0, 100.0), Size::new(200.0, 40.0));
        let position = cancel_label_position(rect, &FixedMeasurer(Size::new(60.0, 20.0)));
        assert_eq!(position, Point::new(80.0, 110.0));
    }
}
