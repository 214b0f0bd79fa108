//! Organic "blob" backdrop: spring-anchored points joined by a smooth closed curve, each with a
//! soft glow.

pub mod physics;
pub mod point;
pub mod render;

use crate::engine::Effect;
use crate::foundation::core::{Canvas, FrameTick};
use crate::foundation::error::{GlowError, GlowResult};
use crate::foundation::rng::RandomSource;
use crate::surface::Surface;

pub use physics::{PhysicsParams, advance};
pub use point::{BlobPoint, regenerate};
pub use render::GlowTint;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlobParams {
    pub count: usize,
    pub physics: PhysicsParams,
    pub glow_tint: GlowTint,
}

impl Default for BlobParams {
    fn default() -> Self {
        Self {
            count: 10,
            physics: PhysicsParams::default(),
            glow_tint: GlowTint::White,
        }
    }
}

impl BlobParams {
    pub fn validate(&self) -> GlowResult<()> {
        if self.count == 0 {
            return Err(GlowError::validation("blob count must be > 0"));
        }
        self.physics.validate()
    }
}

#[derive(Clone, Debug)]
pub struct BlobEffect {
    params: BlobParams,
    canvas: Canvas,
    points: Vec<BlobPoint>,
}

impl BlobEffect {
    pub fn new(params: BlobParams) -> GlowResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            canvas: Canvas::default(),
            points: Vec::new(),
        })
    }

    pub fn params(&self) -> &BlobParams {
        &self.params
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn points(&self) -> &[BlobPoint] {
        &self.points
    }
}

impl Effect for BlobEffect {
    fn name(&self) -> &'static str {
        "blob"
    }

    fn reset(&mut self, canvas: Canvas, rng: &mut dyn RandomSource) {
        self.canvas = canvas;
        self.points = regenerate(canvas, self.params.count, rng);
    }

    // Resize uses the default: the whole set is rebuilt for the new size.

    fn step(&mut self, _tick: FrameTick, _rng: &mut dyn RandomSource) -> bool {
        advance(&mut self.points, self.canvas, &self.params.physics);
        true
    }

    fn paint(&self, surface: &mut dyn Surface) -> GlowResult<()> {
        render::paint(surface, &self.points, self.canvas, self.params.glow_tint)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blob/effect.rs"]
mod tests;
