//! The sibling decorative effects, and [`AnyEffect`] for hosts that pick one at runtime.

pub mod backdrop;
pub mod particles;
pub mod radar;

use crate::blob::BlobEffect;
use crate::engine::Effect;
use crate::foundation::core::{Canvas, FrameTick};
use crate::foundation::error::GlowResult;
use crate::foundation::rng::RandomSource;
use crate::surface::Surface;

pub use backdrop::{BackdropEffect, BackdropParams};
pub use particles::{FieldKind, ParticleParams, ParticlesEffect};
pub use radar::{RadarData, RadarDataset, RadarEffect};

/// Any built-in effect, chosen by configuration.
#[derive(Clone, Debug)]
pub enum AnyEffect {
    Blob(BlobEffect),
    Radar(RadarEffect),
    Particles(ParticlesEffect),
    Backdrop(BackdropEffect),
}

impl AnyEffect {
    fn inner(&self) -> &dyn Effect {
        match self {
            Self::Blob(e) => e,
            Self::Radar(e) => e,
            Self::Particles(e) => e,
            Self::Backdrop(e) => e,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Effect {
        match self {
            Self::Blob(e) => e,
            Self::Radar(e) => e,
            Self::Particles(e) => e,
            Self::Backdrop(e) => e,
        }
    }
}

impl Effect for AnyEffect {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn reset(&mut self, canvas: Canvas, rng: &mut dyn RandomSource) {
        self.inner_mut().reset(canvas, rng);
    }

    fn resize(&mut self, canvas: Canvas, rng: &mut dyn RandomSource) {
        self.inner_mut().resize(canvas, rng);
    }

    fn step(&mut self, tick: FrameTick, rng: &mut dyn RandomSource) -> bool {
        self.inner_mut().step(tick, rng)
    }

    fn paint(&self, surface: &mut dyn Surface) -> GlowResult<()> {
        self.inner().paint(surface)
    }
}

impl From<BlobEffect> for AnyEffect {
    fn from(e: BlobEffect) -> Self {
        Self::Blob(e)
    }
}

impl From<RadarEffect> for AnyEffect {
    fn from(e: RadarEffect) -> Self {
        Self::Radar(e)
    }
}

impl From<ParticlesEffect> for AnyEffect {
    fn from(e: ParticlesEffect) -> Self {
        Self::Particles(e)
    }
}

impl From<BackdropEffect> for AnyEffect {
    fn from(e: BackdropEffect) -> Self {
        Self::Backdrop(e)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/any.rs"]
mod tests;
