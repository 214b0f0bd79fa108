use std::sync::Arc;

use kurbo::Shape as _;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Canvas, Point, Rect};
use crate::foundation::error::{GlowError, GlowResult};
use crate::surface::{FrameRGBA, Paint, Surface};

/// CPU raster surface powered by `vello_cpu`.
///
/// Solid paints go straight to the rasterizer. Gradients are evaluated into a premultiplied
/// image covering the visible bounds of the path and used as an image paint.
pub struct CpuSurface {
    canvas: Canvas,
    width: u16,
    height: u16,
    clear_rgba: Option<[u8; 4]>,
    pixmap: vello_cpu::Pixmap,
    ctx: vello_cpu::RenderContext,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .field("clear_rgba", &self.clear_rgba)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> GlowResult<Self> {
        let (width, height) = canvas.raster_dims()?;
        Ok(Self {
            canvas,
            width,
            height,
            clear_rgba: None,
            pixmap: vello_cpu::Pixmap::new(width, height),
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    /// Straight RGBA color the surface is cleared to; `None` clears to transparent.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }

    /// Copy out the pixels of the last presented frame.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn fill_gradient(&mut self, path: &BezPath, paint: &Paint) -> GlowResult<()> {
        let Some(visible) = visible_bounds(path.bounding_box(), self.canvas) else {
            return Ok(());
        };
        let x0 = visible.x0.floor();
        let y0 = visible.y0.floor();
        let w = (visible.x1.ceil() - x0).max(1.0) as u32;
        let h = (visible.y1.ceil() - y0).max(1.0) as u32;

        let mut bytes = vec![0u8; (w as usize).saturating_mul(h as usize).saturating_mul(4)];
        for y in 0..h {
            for x in 0..w {
                let p = Point::new(x0 + f64::from(x) + 0.5, y0 + f64::from(y) + 0.5);
                let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
                bytes[idx..idx + 4].copy_from_slice(&paint.sample(p).to_array());
            }
        }
        let image = rgba_premul_to_image(&bytes, w, h)?;

        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::translate((x0, y0)));
        self.ctx.set_paint(image);
        self.ctx.fill_path(&bezpath_to_cpu(path));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

impl Surface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) -> GlowResult<()> {
        if canvas == self.canvas {
            return Ok(());
        }
        let (width, height) = canvas.raster_dims()?;
        self.canvas = canvas;
        self.width = width;
        self.height = height;
        self.pixmap = vello_cpu::Pixmap::new(width, height);
        self.ctx = vello_cpu::RenderContext::new(width, height);
        Ok(())
    }

    fn clear(&mut self) {
        self.ctx.reset();
        clear_pixmap_to_transparent(&mut self.pixmap);
        if let Some([r, g, b, a]) = self.clear_rgba {
            self.ctx
                .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            self.ctx
                .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) -> GlowResult<()> {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match paint {
            Paint::Solid(c) => {
                self.ctx.set_paint(color_to_cpu(*c));
                self.ctx.fill_path(&bezpath_to_cpu(path));
                Ok(())
            }
            Paint::Linear(_) | Paint::Radial(_) => self.fill_gradient(path, paint),
        }
    }

    fn stroke_path(&mut self, path: &BezPath, color: Rgba8, width: f64) -> GlowResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GlowError::render("stroke width must be finite and > 0"));
        }
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
        Ok(())
    }

    fn present(&mut self) -> GlowResult<()> {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        Ok(())
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> GlowResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> GlowResult<vello_cpu::Pixmap> {
    let (w, h) = Canvas::new(width, height).raster_dims()?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(GlowError::render("pixmap byte len mismatch"));
    }
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

/// Visible part of `r` on `canvas`, or `None` when fully off-surface.
fn visible_bounds(r: Rect, canvas: Canvas) -> Option<Rect> {
    let v = r.intersect(canvas.as_rect());
    (v.width() > 0.0 && v.height() > 0.0).then_some(v)
}

#[cfg(test)]
#[path = "../../tests/unit/surface/cpu.rs"]
mod tests;
