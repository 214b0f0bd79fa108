use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Canvas};
use crate::foundation::error::GlowResult;
use crate::surface::{Paint, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear,
    Fill { path: BezPath, paint: Paint },
    Stroke {
        path: BezPath,
        color: Rgba8,
        width: f64,
    },
    Present,
}

/// Surface that keeps every draw call instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    canvas: Canvas,
    cmds: Vec<DrawCmd>,
    frames_presented: u64,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Commands recorded since the last [`Surface::clear`].
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn fills(&self) -> impl Iterator<Item = (&BezPath, &Paint)> {
        self.cmds.iter().filter_map(|c| match c {
            DrawCmd::Fill { path, paint } => Some((path, paint)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&BezPath, Rgba8, f64)> {
        self.cmds.iter().filter_map(|c| match c {
            DrawCmd::Stroke { path, color, width } => Some((path, *color, *width)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) -> GlowResult<()> {
        self.canvas = canvas;
        Ok(())
    }

    fn clear(&mut self) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear);
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) -> GlowResult<()> {
        self.cmds.push(DrawCmd::Fill {
            path: path.clone(),
            paint: paint.clone(),
        });
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64) -> GlowResult<()> {
        self.cmds.push(DrawCmd::Stroke {
            path: path.clone(),
            color,
            width,
        });
        Ok(())
    }

    fn present(&mut self) -> GlowResult<()> {
        self.cmds.push(DrawCmd::Present);
        self.frames_presented += 1;
        Ok(())
    }
}
