use crate::blob::point::BlobPoint;
use crate::foundation::core::Canvas;
use crate::foundation::error::{GlowError, GlowResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Fraction of the displacement from origin added to velocity each frame.
    pub spring: f64,
    /// Velocity multiplier applied each frame.
    pub friction: f64,
    /// Out-of-bounds distance tolerated before velocity is reflected.
    pub margin: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            spring: 0.003,
            friction: 0.98,
            margin: 100.0,
        }
    }
}

impl PhysicsParams {
    pub fn validate(&self) -> GlowResult<()> {
        if !self.spring.is_finite() || self.spring < 0.0 {
            return Err(GlowError::validation("spring must be finite and >= 0"));
        }
        if !self.friction.is_finite() || !(0.0..=1.0).contains(&self.friction) {
            return Err(GlowError::validation("friction must lie in [0, 1]"));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(GlowError::validation("margin must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Advance every point by one frame, in place.
///
/// The order is integrate, spring, friction, reflect. Swapping friction and spring shifts the
/// settling radius; reflecting before integrating lags the bounce by a frame. Reflection points
/// the velocity back at the surface without clamping position, so a point may sit past the
/// margin for a frame or two. A point already heading inward is left alone; flipping it again
/// would push it back out and let the overshoot grow without bound.
pub fn advance(points: &mut [BlobPoint], canvas: Canvas, params: &PhysicsParams) {
    let (w, h) = (canvas.width_f64(), canvas.height_f64());
    let m = params.margin;
    for p in points.iter_mut() {
        p.pos.x += p.velocity.x;
        p.pos.y += p.velocity.y;

        p.velocity.x += (p.origin.x - p.pos.x) * params.spring;
        p.velocity.y += (p.origin.y - p.pos.y) * params.spring;

        p.velocity.x *= params.friction;
        p.velocity.y *= params.friction;

        p.velocity.x = reflect(p.pos.x, p.velocity.x, -m, w + m);
        p.velocity.y = reflect(p.pos.y, p.velocity.y, -m, h + m);
    }
}

fn reflect(pos: f64, v: f64, lo: f64, hi: f64) -> f64 {
    if pos < lo {
        v.abs()
    } else if pos > hi {
        -v.abs()
    } else {
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blob/physics.rs"]
mod tests;
