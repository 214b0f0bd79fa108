use crate::foundation::core::{Canvas, FrameTick};
use crate::foundation::error::GlowResult;
use crate::foundation::rng::RandomSource;
use crate::surface::Surface;

/// A procedural visual owned by one [`AnimationEngine`](crate::AnimationEngine).
///
/// The engine calls `step` then `paint` once per frame, strictly sequentially, and never after
/// the engine has stopped.
pub trait Effect {
    fn name(&self) -> &'static str;

    /// Build fresh state for a surface of size `canvas`.
    fn reset(&mut self, canvas: Canvas, rng: &mut dyn RandomSource);

    /// React to a host resize. Defaults to a full [`Effect::reset`].
    fn resize(&mut self, canvas: Canvas, rng: &mut dyn RandomSource) {
        self.reset(canvas, rng);
    }

    /// Advance one frame. Returns `false` once the effect has nothing left to animate.
    fn step(&mut self, tick: FrameTick, rng: &mut dyn RandomSource) -> bool;

    fn paint(&self, surface: &mut dyn Surface) -> GlowResult<()>;
}
