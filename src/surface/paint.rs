use crate::foundation::color::{Rgba8, Rgba8Premul};
use crate::foundation::core::Point;

/// One color stop of a gradient; `offset` lies in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba8,
}

impl ColorStop {
    pub fn new(offset: f32, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Gradient running along the segment `start -> end`; pads beyond both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn sample(&self, p: Point) -> Rgba8Premul {
        let axis = self.end - self.start;
        let len2 = axis.hypot2();
        let t = if len2 <= f64::EPSILON {
            0.0
        } else {
            (p - self.start).dot(axis) / len2
        };
        sample_stops(&self.stops, t)
    }
}

/// Gradient from `center` (offset 0) to the circle of `radius` (offset 1).
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn sample(&self, p: Point) -> Rgba8Premul {
        let t = if self.radius <= 0.0 {
            1.0
        } else {
            (p - self.center).hypot() / self.radius
        };
        sample_stops(&self.stops, t)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    /// Color at `p`, premultiplied.
    pub fn sample(&self, p: Point) -> Rgba8Premul {
        match self {
            Self::Solid(c) => c.premul(),
            Self::Linear(g) => g.sample(p),
            Self::Radial(g) => g.sample(p),
        }
    }
}

/// Interpolate between stops in premultiplied space; pad extension.
pub(crate) fn sample_stops(stops: &[ColorStop], t: f64) -> Rgba8Premul {
    let Some(first) = stops.first() else {
        return Rgba8Premul::transparent();
    };
    let t = if t.is_finite() { t } else { 0.0 };
    if t <= f64::from(first.offset) {
        return first.color.premul();
    }
    for w in stops.windows(2) {
        let (a, b) = (w[0], w[1]);
        let (oa, ob) = (f64::from(a.offset), f64::from(b.offset));
        if t <= ob {
            let span = ob - oa;
            if span <= 0.0 {
                return b.color.premul();
            }
            return Rgba8Premul::lerp(a.color.premul(), b.color.premul(), (t - oa) / span);
        }
    }
    stops[stops.len() - 1].color.premul()
}

#[cfg(test)]
#[path = "../../tests/unit/surface/paint.rs"]
mod tests;
