//! Aliased rasterization of strokes and shape outlines onto a [`Surface`].
//!
//! Pixel `(x, y)` is sampled at its integer coordinate. A pixel is covered by
//! a stroke of width `w` when its distance to the stroke's centre line is at
//! most `w / 2` (never less than half a pixel), which gives round caps and
//! round joins for free. Coverage is binary so colors compare exactly.

use egui::{Pos2, pos2};
use image::Rgba;

use crate::surface::{Surface, TRANSPARENT};

const COVERAGE_EPSILON: f32 = 1e-4;

/// How covered pixels combine with what is already on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Paint the source color over the destination
    #[default]
    SourceOver,
    /// Clear the destination to fully transparent
    DestinationOut,
}

/// Color, width and compositing for one draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Rgba<u8>,
    pub width: u32,
    pub mode: CompositeMode,
}

impl Pen {
    pub fn new(color: Rgba<u8>, width: u32) -> Self {
        Self {
            color,
            width,
            mode: CompositeMode::SourceOver,
        }
    }

    pub fn eraser(width: u32) -> Self {
        Self {
            color: TRANSPARENT,
            width,
            mode: CompositeMode::DestinationOut,
        }
    }

    fn half_width(&self) -> f32 {
        (self.width as f32 / 2.0).max(0.5)
    }

    fn apply(&self, destination: Rgba<u8>) -> Rgba<u8> {
        match self.mode {
            CompositeMode::SourceOver => source_over(self.color, destination),
            CompositeMode::DestinationOut => TRANSPARENT,
        }
    }
}

/// Outline geometry produced by the shape tools
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line { from: Pos2, to: Pos2 },
    /// Axis-aligned, `min` is the top-left corner
    Rectangle { min: Pos2, max: Pos2 },
    Circle { center: Pos2, radius: f32 },
}

impl Shape {
    pub fn line(from: Pos2, to: Pos2) -> Self {
        Self::Line { from, to }
    }

    /// Rectangle with `a` and `b` as opposite corners, in any drag direction
    pub fn rectangle(a: Pos2, b: Pos2) -> Self {
        Self::Rectangle {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Circle centred on `center` passing through `edge`
    pub fn circle(center: Pos2, edge: Pos2) -> Self {
        Self::Circle {
            center,
            radius: center.distance(edge),
        }
    }
}

/// Paint `color` over `destination` with unpremultiplied alpha blending.
pub fn source_over(color: Rgba<u8>, destination: Rgba<u8>) -> Rgba<u8> {
    match color[3] {
        255 => color,
        0 => destination,
        alpha => {
            let sa = f32::from(alpha) / 255.0;
            let da = f32::from(destination[3]) / 255.0;
            let out_a = sa + da * (1.0 - sa);
            let blend = |s: u8, d: u8| {
                ((f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / out_a).round() as u8
            };
            Rgba([
                blend(color[0], destination[0]),
                blend(color[1], destination[1]),
                blend(color[2], destination[2]),
                (out_a * 255.0).round() as u8,
            ])
        }
    }
}

/// Distance from `p` to the segment `a`-`b`
fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Clamp a float coordinate into a range that is safe to cast
fn to_pixel(value: f32) -> i64 {
    value.clamp(-1.0e9, 1.0e9) as i64
}

/// Paint every pixel of the bounding box `[min, max]` for which `covered` holds.
fn fill_covered(
    surface: &mut Surface,
    min: Pos2,
    max: Pos2,
    pen: &Pen,
    covered: impl Fn(Pos2) -> bool,
) {
    if !(min.x.is_finite() && min.y.is_finite() && max.x.is_finite() && max.y.is_finite()) {
        return;
    }
    let from = (to_pixel(min.x.floor()), to_pixel(min.y.floor()));
    let to = (to_pixel(max.x.ceil()), to_pixel(max.y.ceil()));

    surface.update_region(from, to, |x, y, current| {
        covered(pos2(x as f32, y as f32)).then(|| pen.apply(current))
    });
}

/// Stroke a single segment with round caps
pub fn stroke_segment(surface: &mut Surface, from: Pos2, to: Pos2, pen: &Pen) {
    stroke_segments(surface, &[(from, to)], pen);
}

/// Stroke a set of segments as one path: each pixel is composited at most once
/// even where segments overlap, and joins are round.
pub fn stroke_segments(surface: &mut Surface, segments: &[(Pos2, Pos2)], pen: &Pen) {
    let Some(first) = segments.first() else {
        return;
    };
    let reach = pen.half_width() + COVERAGE_EPSILON;

    let (mut min, mut max) = (first.0.min(first.1), first.0.max(first.1));
    for (a, b) in segments {
        min = min.min(a.min(*b));
        max = max.max(a.max(*b));
    }
    let pad = egui::Vec2::splat(reach);

    fill_covered(surface, min - pad, max + pad, pen, |p| {
        segments
            .iter()
            .any(|(a, b)| distance_to_segment(p, *a, *b) <= reach)
    });
}

/// Stroke the outline of a circle
pub fn stroke_circle(surface: &mut Surface, center: Pos2, radius: f32, pen: &Pen) {
    let reach = pen.half_width() + COVERAGE_EPSILON;
    let pad = egui::Vec2::splat(radius + reach);

    fill_covered(surface, center - pad, center + pad, pen, |p| {
        (p.distance(center) - radius).abs() <= reach
    });
}

/// Stroke the outline of any tool shape.
///
/// A rectangle with no extent or a circle with no radius has no outline and
/// paints nothing. A zero-length line still leaves a round dot.
pub fn stroke_shape(surface: &mut Surface, shape: &Shape, pen: &Pen) {
    match *shape {
        Shape::Line { from, to } => stroke_segment(surface, from, to, pen),
        Shape::Rectangle { min, max } if min == max => {}
        Shape::Circle { radius, .. } if radius <= 0.0 => {}
        Shape::Rectangle { min, max } => {
            let top_right = pos2(max.x, min.y);
            let bottom_left = pos2(min.x, max.y);
            stroke_segments(
                surface,
                &[
                    (min, top_right),
                    (top_right, max),
                    (max, bottom_left),
                    (bottom_left, min),
                ],
                pen,
            );
        }
        Shape::Circle { center, radius } => stroke_circle(surface, center, radius, pen),
    }
}
