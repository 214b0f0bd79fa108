//! Headless rendering: drive an effect through its engine at a fixed frame rate and collect the
//! frames.

pub mod sink;

use crate::config::SceneConfig;
use crate::effects::AnyEffect;
use crate::engine::{AnimationEngine, EngineState, EngineStats, ManualScheduler};
use crate::foundation::core::{Canvas, FrameIndex, FrameRange};
use crate::foundation::error::{GlowError, GlowResult};
use crate::surface::{CpuSurface, FrameRGBA};

pub use sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};

pub type SceneEngine = AnimationEngine<AnyEffect, CpuSurface, ManualScheduler>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames delivered to the sink.
    pub frames_total: u64,
    /// Engine counters at the end of the range.
    pub engine: EngineStats,
}

/// One scene rendered offscreen.
///
/// Effects are simulations, so frame `n` is reached by stepping every frame before it. Asking
/// for an earlier frame than the last one rendered replays the scene from its seed. A replay
/// only knows the config, so it is refused once the host has driven the engine directly.
pub struct Session {
    config: SceneConfig,
    engine: SceneEngine,
    next_frame: u64,
    host_input: bool,
}

impl Session {
    #[tracing::instrument(skip_all, fields(effect = ?config.effect.kind(), seed = config.seed))]
    pub fn from_config(config: &SceneConfig) -> GlowResult<Self> {
        config.validate()?;
        let engine = start_engine(config)?;
        Ok(Self {
            config: config.clone(),
            engine,
            next_frame: 0,
            host_input: false,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn canvas(&self) -> Canvas {
        self.config.canvas
    }

    pub fn engine(&self) -> &SceneEngine {
        &self.engine
    }

    /// Direct engine access for host input between frames (focus changes, resizes).
    ///
    /// Input made here is not recorded, so afterwards the session can no longer replay earlier
    /// frames.
    pub fn engine_mut(&mut self) -> &mut SceneEngine {
        self.host_input = true;
        &mut self.engine
    }

    /// Index of the frame the next [`Session::advance`] will produce.
    pub fn next_frame(&self) -> FrameIndex {
        FrameIndex(self.next_frame)
    }

    /// Deliver one display refresh and return the surface contents afterwards.
    ///
    /// A settled effect gets no callback; its last painted frame is returned again.
    pub fn advance(&mut self) -> GlowResult<FrameRGBA> {
        if self.engine.state() == EngineState::Stopped {
            return Err(GlowError::validation("session has been stopped"));
        }
        let tick = self.config.fps.tick(self.next_frame);
        for id in self.engine.scheduler_mut().take_due() {
            self.engine.on_frame(id, tick);
        }
        self.next_frame += 1;
        self.snapshot()
    }

    /// Render frame `frame`, stepping (or replaying) the simulation up to it.
    ///
    /// Going backwards after [`Session::engine_mut`] was used is an error: the replay would
    /// silently drop that input.
    pub fn render_frame(&mut self, frame: FrameIndex) -> GlowResult<FrameRGBA> {
        if self.engine.state() == EngineState::Stopped {
            return Err(GlowError::validation("session has been stopped"));
        }
        if frame.0 < self.next_frame {
            if self.host_input {
                return Err(GlowError::validation(format!(
                    "cannot replay to frame {} after direct engine input",
                    frame.0
                )));
            }
            tracing::debug!(frame = frame.0, "replaying scene from frame 0");
            self.engine = start_engine(&self.config)?;
            self.next_frame = 0;
        }
        while self.next_frame < frame.0 {
            self.advance()?;
        }
        self.advance()
    }

    /// Render `range` and stream the frames into `sink` in order.
    #[tracing::instrument(skip_all, fields(start = range.start.0, end = range.end.0))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> GlowResult<RenderStats> {
        if range.is_empty() {
            return Err(GlowError::validation("render_range range must be non-empty"));
        }
        sink.begin(SinkConfig {
            width: self.config.canvas.width,
            height: self.config.canvas.height,
            fps: self.config.fps,
        })?;
        let mut stats = RenderStats::default();
        for idx in range.iter() {
            let frame = self.render_frame(idx)?;
            sink.push_frame(idx, &frame)?;
            stats.frames_total += 1;
        }
        sink.end()?;
        stats.engine = self.engine.stats();
        tracing::info!(frames = stats.frames_total, dropped = stats.engine.failed_paints, "range rendered");
        Ok(stats)
    }

    /// Render every configured frame.
    pub fn render_all(&mut self, sink: &mut dyn FrameSink) -> GlowResult<RenderStats> {
        let range = FrameRange::new(FrameIndex(0), FrameIndex(self.config.frames))?;
        self.render_range(range, sink)
    }

    pub fn stop(&mut self) {
        self.engine.stop();
    }

    fn snapshot(&self) -> GlowResult<FrameRGBA> {
        self.engine
            .surface()
            .map(CpuSurface::snapshot)
            .ok_or_else(|| GlowError::render("session has no surface"))
    }
}

fn start_engine(config: &SceneConfig) -> GlowResult<SceneEngine> {
    let effect = config.effect.build()?;
    let surface = CpuSurface::new(config.canvas)?.with_clear_rgba(config.clear_rgba);
    let mut engine = AnimationEngine::new(effect, ManualScheduler::new(), config.seed);
    if !engine.mount(Some(surface), config.canvas)? {
        return Err(GlowError::render("effect did not start"));
    }
    Ok(engine)
}

#[cfg(test)]
#[path = "../../tests/unit/session/render.rs"]
mod tests;
