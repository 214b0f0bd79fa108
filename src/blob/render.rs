use kurbo::Shape as _;

use crate::blob::point::BlobPoint;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Canvas, Point};
use crate::foundation::error::GlowResult;
use crate::surface::{ColorStop, LinearGradient, Paint, RadialGradient, Surface};

/// Control points sit this far along each segment from either end.
pub const CONTROL_FRACTION: f64 = 0.4;

const BLOB_STOPS: [(f32, Rgba8); 3] = [
    (0.0, Rgba8::new(0, 112, 243, 13)),
    (0.5, Rgba8::new(109, 40, 217, 13)),
    (1.0, Rgba8::new(0, 197, 142, 13)),
];

/// Which color the per-point glow sprites use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlowTint {
    #[default]
    White,
    PointColor,
}

/// Closed smooth curve through `points` in order; `None` for an empty set.
pub fn blob_path(points: &[BlobPoint]) -> Option<BezPath> {
    let first = points.first()?;
    let mut path = BezPath::new();
    path.move_to(first.pos);
    for (i, cur) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()].pos;
        let d = next - cur.pos;
        let c1 = cur.pos + d * CONTROL_FRACTION;
        let c2 = next - d * CONTROL_FRACTION;
        path.curve_to(c1, c2, next);
    }
    path.close_path();
    Some(path)
}

/// Diagonal three-stop wash filling the blob; independent of point data.
pub fn blob_paint(canvas: Canvas) -> Paint {
    Paint::Linear(LinearGradient {
        start: Point::ZERO,
        end: Point::new(canvas.width_f64(), canvas.height_f64()),
        stops: BLOB_STOPS
            .iter()
            .map(|&(o, c)| ColorStop::new(o, c))
            .collect(),
    })
}

/// Disc of radius `2 * size` fading from the point's opacity to transparent.
pub fn glow_sprite(point: &BlobPoint, tint: GlowTint) -> (BezPath, Paint) {
    let base = match tint {
        GlowTint::White => Rgba8::WHITE,
        GlowTint::PointColor => point.color,
    };
    let radius = point.size * 2.0;
    let paint = Paint::Radial(RadialGradient {
        center: point.pos,
        radius,
        stops: vec![
            ColorStop::new(0.0, base.with_alpha_f(point.opacity)),
            ColorStop::new(0.5, base.with_alpha_f(point.opacity * 0.5)),
            ColorStop::new(1.0, base.with_alpha_f(0.0)),
        ],
    });
    let disc = kurbo::Circle::new(point.pos, radius).to_path(0.1);
    (disc, paint)
}

/// Repaint the whole surface: blob first, glows on top.
pub fn paint(
    surface: &mut dyn Surface,
    points: &[BlobPoint],
    canvas: Canvas,
    tint: GlowTint,
) -> GlowResult<()> {
    surface.clear();
    if let Some(path) = blob_path(points) {
        surface.fill_path(&path, &blob_paint(canvas))?;
    }
    for p in points {
        let (disc, glow) = glow_sprite(p, tint);
        surface.fill_path(&disc, &glow)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/blob/render.rs"]
mod tests;
