//! Drawing surfaces effects paint into.
//!
//! The engine only needs a small 2D raster vocabulary: clear, fill a path with a solid or
//! gradient paint, stroke a path, and publish the frame. Paths are plain kurbo [`BezPath`]s in
//! surface pixel space.

pub mod cpu;
pub mod frame;
pub mod paint;
pub mod recording;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Canvas};
use crate::foundation::error::GlowResult;

pub use cpu::CpuSurface;
pub use frame::FrameRGBA;
pub use paint::{ColorStop, LinearGradient, Paint, RadialGradient};
pub use recording::{DrawCmd, RecordingSurface};

/// A 2D raster target owned by exactly one running effect.
///
/// Draw calls issued between [`Surface::clear`] and [`Surface::present`] form one frame and are
/// composited in call order.
pub trait Surface {
    fn canvas(&self) -> Canvas;

    /// Match the surface size to the host viewport.
    fn resize(&mut self, canvas: Canvas) -> GlowResult<()>;

    /// Begin a frame by discarding all previous contents.
    fn clear(&mut self);

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) -> GlowResult<()>;

    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64) -> GlowResult<()>;

    /// Finish the frame and make it visible.
    fn present(&mut self) -> GlowResult<()>;
}
