//! glowfield paints procedural decorative effects into an owned 2D raster surface.
//!
//! An [`AnimationEngine`] binds one [`Effect`] to one [`Surface`] and a host
//! [`FrameScheduler`]: every delivered frame runs `step` then `paint`, and the engine keeps
//! exactly one frame request outstanding while the effect is animating.
//!
//! Built-in effects:
//!
//! - [`BlobEffect`]: spring-anchored points joined by a smooth closed curve, each with a glow
//! - [`RadarEffect`]: a radar chart that grows in over fifty frames
//! - [`ParticlesEffect`]: particles streaming out of the focused form field
//! - [`BackdropEffect`]: slowly wandering translucent bubbles
//!
//! For offscreen rendering, load a [`SceneConfig`] and drive it through a [`Session`].
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod blob;
pub mod config;
pub mod effects;
pub mod engine;
pub mod session;
pub mod surface;

pub use crate::foundation::color::{Rgba8, Rgba8Premul, hsl};
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, FrameTick, Point, Rect, Vec2,
};
pub use crate::foundation::error::{GlowError, GlowResult};
pub use crate::foundation::rng::{RandomSource, Rng64};

pub use crate::blob::{BlobEffect, BlobParams, BlobPoint, GlowTint, PhysicsParams};
pub use crate::config::{EffectConfig, EffectKind, SceneConfig};
pub use crate::effects::{
    AnyEffect, BackdropEffect, BackdropParams, FieldKind, ParticleParams, ParticlesEffect,
    RadarData, RadarDataset, RadarEffect,
};
pub use crate::engine::{
    AnimationEngine, Effect, EngineState, EngineStats, FrameOutcome, FrameRequestId,
    FrameScheduler, ManualScheduler,
};
pub use crate::session::{
    FrameSink, InMemorySink, PngSequenceSink, RenderStats, Session, SinkConfig,
};
pub use crate::surface::{CpuSurface, FrameRGBA, Paint, RecordingSurface, Surface};
