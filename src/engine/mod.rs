//! Frame driver, lifecycle binder and the host-facing scheduling seam.

pub mod driver;
pub mod effect;
pub mod scheduler;

pub use driver::{AnimationEngine, EngineState, EngineStats, FrameOutcome};
pub use effect::Effect;
pub use scheduler::{FrameRequestId, FrameScheduler, ManualScheduler};
