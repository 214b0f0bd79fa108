use crate::foundation::color::{Rgba8, hsl};
use crate::foundation::core::{Canvas, Point, Vec2};
use crate::foundation::rng::RandomSource;

pub const SIZE_RANGE: (f64, f64) = (5.0, 15.0);
pub const OPACITY_RANGE: (f64, f64) = (0.3, 0.8);
pub const HUE_RANGE: (f64, f64) = (180.0, 360.0);

/// One spring-anchored particle of the blob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobPoint {
    pub pos: Point,
    /// Anchor the spring pulls toward; fixed until the next regeneration.
    pub origin: Point,
    /// Displacement per frame.
    pub velocity: Vec2,
    /// Glow radius is `2 * size`.
    pub size: f64,
    pub color: Rgba8,
    pub opacity: f64,
}

impl BlobPoint {
    /// A point resting at its anchor, used by tests and hosts that place points by hand.
    pub fn at_rest(pos: Point) -> Self {
        Self {
            pos,
            origin: pos,
            velocity: Vec2::ZERO,
            size: SIZE_RANGE.0,
            color: Rgba8::WHITE,
            opacity: OPACITY_RANGE.0,
        }
    }
}

/// Build a fresh point set for a surface of size `canvas`.
///
/// Samples are drawn per point in a fixed order (position, origin, velocity, size, hue,
/// opacity), so a given seed always yields the same set.
pub fn regenerate(canvas: Canvas, count: usize, rng: &mut dyn RandomSource) -> Vec<BlobPoint> {
    let (w, h) = (canvas.width_f64(), canvas.height_f64());
    (0..count)
        .map(|_| {
            let x = rng.range(0.0, w);
            let y = rng.range(0.0, h);
            let origin_x = rng.range(0.0, w);
            let origin_y = rng.range(0.0, h);
            let vx = rng.range(-1.0, 1.0);
            let vy = rng.range(-1.0, 1.0);
            let size = rng.range(SIZE_RANGE.0, SIZE_RANGE.1);
            let hue = rng.range(HUE_RANGE.0, HUE_RANGE.1);
            let opacity = rng.range(OPACITY_RANGE.0, OPACITY_RANGE.1);
            BlobPoint {
                pos: Point::new(x, y),
                origin: Point::new(origin_x, origin_y),
                velocity: Vec2::new(vx, vy),
                size,
                color: hsl(hue, 0.8, 0.6),
                opacity,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/blob/point.rs"]
mod tests;
