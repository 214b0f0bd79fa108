use crate::engine::effect::Effect;
use crate::engine::scheduler::{FrameRequestId, FrameScheduler};
use crate::foundation::core::{Canvas, FrameTick};
use crate::foundation::error::GlowResult;
use crate::foundation::rng::Rng64;
use crate::surface::Surface;

/// Lifecycle of one mounted effect. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub steps: u64,
    pub paints: u64,
    pub failed_paints: u64,
    pub resizes: u64,
}

/// What a delivered frame callback did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not the pending request, or the engine is not running. Nothing was touched.
    Ignored,
    Painted,
    /// The step ran but painting failed; the frame was dropped.
    Dropped,
}

/// Frame driver and lifecycle binder for a single effect instance.
///
/// The engine exclusively owns its effect state, its surface and its outstanding frame request.
/// Each delivered frame runs `step` then `paint` synchronously and, while the effect keeps
/// animating, requests exactly one follow-up frame. Host events (resize, teardown) arrive as
/// method calls.
pub struct AnimationEngine<E: Effect, S: Surface, Sch: FrameScheduler> {
    effect: E,
    surface: Option<S>,
    scheduler: Sch,
    rng: Rng64,
    state: EngineState,
    pending: Option<FrameRequestId>,
    stats: EngineStats,
}

impl<E: Effect, S: Surface, Sch: FrameScheduler> AnimationEngine<E, S, Sch> {
    pub fn new(effect: E, scheduler: Sch, seed: u64) -> Self {
        Self {
            effect,
            surface: None,
            scheduler,
            rng: Rng64::new(seed),
            state: EngineState::Uninitialized,
            pending: None,
            stats: EngineStats::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// Mutable access for host-driven effect inputs (e.g. which form field is focused).
    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn scheduler(&self) -> &Sch {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Sch {
        &mut self.scheduler
    }

    pub fn pending_request(&self) -> Option<FrameRequestId> {
        self.pending
    }

    /// Bind the effect to `surface` sized to `viewport` and schedule the first frame.
    ///
    /// A missing surface is not an error: the effect simply does not start and `Ok(false)` is
    /// returned. Mounting twice is a no-op.
    #[tracing::instrument(skip_all)]
    pub fn mount(&mut self, surface: Option<S>, viewport: Canvas) -> GlowResult<bool> {
        if self.state != EngineState::Uninitialized {
            tracing::debug!(state = ?self.state, "mount ignored");
            return Ok(false);
        }
        let Some(mut surface) = surface else {
            tracing::debug!(effect = self.effect.name(), "no drawing surface; not starting");
            return Ok(false);
        };

        surface.resize(viewport)?;
        self.effect.reset(viewport, &mut self.rng);
        self.surface = Some(surface);
        self.pending = Some(self.scheduler.request_frame());
        self.state = EngineState::Running;
        tracing::debug!(
            effect = self.effect.name(),
            width = viewport.width,
            height = viewport.height,
            "effect running"
        );
        Ok(true)
    }

    /// Deliver the host's frame callback for request `id`.
    pub fn on_frame(&mut self, id: FrameRequestId, tick: FrameTick) -> FrameOutcome {
        if self.state != EngineState::Running || self.pending != Some(id) {
            tracing::trace!(?id, state = ?self.state, "stale frame callback");
            return FrameOutcome::Ignored;
        }
        let Some(surface) = self.surface.as_mut() else {
            return FrameOutcome::Ignored;
        };
        self.pending = None;

        let keep_animating = self.effect.step(tick, &mut self.rng);
        self.stats.steps += 1;

        let outcome = match paint_frame(&self.effect, surface) {
            Ok(()) => {
                self.stats.paints += 1;
                FrameOutcome::Painted
            }
            Err(err) => {
                self.stats.failed_paints += 1;
                tracing::warn!(
                    effect = self.effect.name(),
                    frame = tick.index.0,
                    error = %err,
                    "paint failed; frame dropped"
                );
                FrameOutcome::Dropped
            }
        };
        tracing::trace!(frame = tick.index.0, ?outcome, "frame");

        if keep_animating {
            self.pending = Some(self.scheduler.request_frame());
        } else {
            tracing::debug!(effect = self.effect.name(), "effect settled");
        }
        outcome
    }

    /// Host viewport changed. Only honored while running; state is rebuilt synchronously.
    #[tracing::instrument(skip_all, fields(width = canvas.width, height = canvas.height))]
    pub fn on_resize(&mut self, canvas: Canvas) -> GlowResult<()> {
        if self.state != EngineState::Running {
            tracing::debug!(state = ?self.state, "resize ignored");
            return Ok(());
        }
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        surface.resize(canvas)?;
        self.effect.resize(canvas, &mut self.rng);
        self.stats.resizes += 1;

        // A settled effect still needs one frame to show the new size.
        self.wake();
        Ok(())
    }

    /// Ask for a frame after host input changed a settled effect. No-op unless running and idle.
    ///
    /// Returns whether a new request was made.
    pub fn wake(&mut self) -> bool {
        if self.state != EngineState::Running || self.pending.is_some() {
            return false;
        }
        self.pending = Some(self.scheduler.request_frame());
        tracing::trace!(effect = self.effect.name(), "woken");
        true
    }

    /// Tear down: cancel the outstanding frame and stop listening for resizes. Idempotent.
    #[tracing::instrument(skip_all)]
    pub fn stop(&mut self) {
        if self.state == EngineState::Stopped {
            return;
        }
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        self.state = EngineState::Stopped;
        tracing::debug!(effect = self.effect.name(), stats = ?self.stats, "effect stopped");
    }
}

impl<E: Effect, S: Surface, Sch: FrameScheduler> Drop for AnimationEngine<E, S, Sch> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn paint_frame<E: Effect>(effect: &E, surface: &mut dyn Surface) -> GlowResult<()> {
    effect.paint(surface)?;
    surface.present()
}

#[cfg(test)]
#[path = "../../tests/unit/engine/driver.rs"]
mod tests;
