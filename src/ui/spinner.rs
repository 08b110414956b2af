// SPDX-License-Identifier: MPL-2.0
//! Circular progress indicator drawn into the HUD canvas.

use crate::view::ProgressIndicator;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Point};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Segments used for a full turn of the arc.
const SEGMENTS_PER_TURN: f32 = 64.0;

/// Draws `indicator` with its top-left corner at `origin`.
///
/// `fade` multiplies every alpha, for cards that are fading in or out.
pub fn draw(frame: &mut Frame, indicator: &ProgressIndicator, origin: Point, fade: f32) {
    let arc = indicator.arc();
    let center = Point::new(origin.x + arc.center.x, origin.y + arc.center.y);

    let ring = Path::circle(center, arc.background_radius);
    frame.stroke(
        &ring,
        Stroke::default()
            .with_width(indicator.background_line_width())
            .with_color(faded(indicator.background_color(), fade)),
    );

    let presented = indicator.presented();
    let sweep = (presented.end - presented.start).clamp(0.0, 1.0);
    if sweep <= 0.0 || arc.radius <= 0.0 {
        return;
    }

    // Turns start at twelve o'clock.
    let start_angle = presented.rotation + presented.start * TAU - FRAC_PI_2;
    let end_angle = start_angle + sweep * TAU;

    let mut builder = canvas::path::Builder::new();
    builder.move_to(point_on(center, arc.radius, start_angle));

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let segments = (sweep * SEGMENTS_PER_TURN).ceil().max(1.0) as u32;
    #[allow(clippy::cast_precision_loss)]
    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        builder.line_to(point_on(
            center,
            arc.radius,
            start_angle + (end_angle - start_angle) * t,
        ));
    }

    frame.stroke(
        &builder.build(),
        Stroke::default()
            .with_width(indicator.line_width())
            .with_color(faded(indicator.color(), fade))
            .with_line_cap(canvas::LineCap::Round),
    );
}

fn point_on(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

pub(crate) fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}
