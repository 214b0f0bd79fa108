use std::f64::consts::{FRAC_PI_2, TAU};

use crate::engine::Effect;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Canvas, FrameTick, Point};
use crate::foundation::error::{GlowError, GlowResult};
use crate::foundation::rng::RandomSource;
use crate::surface::{Paint, Surface};

pub const GRID_RINGS: usize = 5;
pub const GRID_COLOR: Rgba8 = Rgba8::new(0, 0, 0, 26);
pub const LABEL_OFFSET: f64 = 20.0;
pub const PROGRESS_STEP: f64 = 0.02;
pub const POINT_RADIUS: f64 = 5.0;
pub const BORDER_WIDTH: f64 = 2.0;

/// One series of the chart; `values` are percentages in `[0, 100]`, one per axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadarDataset {
    pub values: Vec<f64>,
    pub fill: Rgba8,
    pub border: Rgba8,
    pub point: Rgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadarData {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarDataset>,
}

impl Default for RadarData {
    fn default() -> Self {
        let primary = Rgba8::rgb(0, 112, 243);
        Self {
            labels: ["React", "JavaScript", "CSS", "UI/UX", "Mobile", "Backend"]
                .into_iter()
                .map(String::from)
                .collect(),
            datasets: vec![RadarDataset {
                values: vec![90.0, 85.0, 80.0, 75.0, 70.0, 65.0],
                fill: primary.with_alpha_f(0.2),
                border: primary,
                point: primary,
            }],
        }
    }
}

impl RadarData {
    pub fn validate(&self) -> GlowResult<()> {
        if self.labels.len() < 3 {
            return Err(GlowError::validation(format!(
                "radar chart needs at least 3 axes, got {}",
                self.labels.len()
            )));
        }
        for (i, ds) in self.datasets.iter().enumerate() {
            if ds.values.len() != self.labels.len() {
                return Err(GlowError::validation(format!(
                    "radar dataset {i} has {} values for {} labels",
                    ds.values.len(),
                    self.labels.len()
                )));
            }
            if let Some(v) = ds.values.iter().find(|v| !(0.0..=100.0).contains(*v)) {
                return Err(GlowError::validation(format!(
                    "radar dataset {i} has value {v} outside [0, 100]"
                )));
            }
        }
        Ok(())
    }
}

/// Chart frame for a given surface: center, outer radius and axis count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f64,
    pub axes: usize,
}

impl RadarGeometry {
    pub fn new(canvas: Canvas, axes: usize) -> Self {
        let center = canvas.center();
        Self {
            center,
            radius: center.x.min(center.y) * 0.8,
            axes,
        }
    }

    /// Axis 0 points straight up; axes proceed clockwise in screen space.
    pub fn angle(&self, axis: usize) -> f64 {
        axis as f64 * TAU / self.axes as f64 - FRAC_PI_2
    }

    pub fn point_on_axis(&self, axis: usize, dist: f64) -> Point {
        let a = self.angle(axis);
        Point::new(
            self.center.x + dist * a.cos(),
            self.center.y + dist * a.sin(),
        )
    }

    pub fn vertices(&self, values: &[f64], progress: f64) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| self.point_on_axis(i, self.radius * (v / 100.0) * progress))
            .collect()
    }
}

/// Radar chart that grows from its center over a fixed number of frames, then settles.
#[derive(Clone, Debug)]
pub struct RadarEffect {
    data: RadarData,
    geometry: RadarGeometry,
    progress: f64,
    drawn: f64,
}

impl RadarEffect {
    pub fn new(data: RadarData) -> GlowResult<Self> {
        data.validate()?;
        let geometry = RadarGeometry::new(Canvas::default(), data.labels.len());
        Ok(Self {
            data,
            geometry,
            progress: 0.0,
            drawn: 0.0,
        })
    }

    pub fn data(&self) -> &RadarData {
        &self.data
    }

    pub fn geometry(&self) -> RadarGeometry {
        self.geometry
    }

    /// Progress the next step will draw with, before clamping.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress used by the most recent paint, in `[0, 1]`.
    pub fn drawn_progress(&self) -> f64 {
        self.drawn
    }

    /// Where each axis label is centered. Text itself is left to the host.
    pub fn label_anchors(&self) -> Vec<(&str, Point)> {
        self.data
            .labels
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let p = self
                    .geometry
                    .point_on_axis(i, self.geometry.radius + LABEL_OFFSET);
                (l.as_str(), p)
            })
            .collect()
    }

    fn paint_grid(&self, surface: &mut dyn Surface) -> GlowResult<()> {
        let g = self.geometry;
        for ring in 1..=GRID_RINGS {
            let r = g.radius / GRID_RINGS as f64 * ring as f64;
            surface.stroke_path(&circle(g.center, r), GRID_COLOR, 1.0)?;
        }
        for axis in 0..g.axes {
            let mut line = BezPath::new();
            line.move_to(g.center);
            line.line_to(g.point_on_axis(axis, g.radius));
            surface.stroke_path(&line, GRID_COLOR, 1.0)?;
        }
        Ok(())
    }

    fn paint_dataset(&self, surface: &mut dyn Surface, ds: &RadarDataset) -> GlowResult<()> {
        let vertices = self.geometry.vertices(&ds.values, self.drawn);
        let mut poly = BezPath::new();
        for (i, &v) in vertices.iter().enumerate() {
            if i == 0 {
                poly.move_to(v);
            } else {
                poly.line_to(v);
            }
        }
        poly.close_path();
        surface.fill_path(&poly, &Paint::Solid(ds.fill))?;
        surface.stroke_path(&poly, ds.border, BORDER_WIDTH)?;

        let dot = Paint::Solid(ds.point);
        for v in vertices {
            surface.fill_path(&circle(v, POINT_RADIUS), &dot)?;
        }
        Ok(())
    }
}

impl Effect for RadarEffect {
    fn name(&self) -> &'static str {
        "radar"
    }

    fn reset(&mut self, canvas: Canvas, _rng: &mut dyn RandomSource) {
        self.geometry = RadarGeometry::new(canvas, self.data.labels.len());
        self.progress = 0.0;
        self.drawn = 0.0;
    }

    fn resize(&mut self, canvas: Canvas, _rng: &mut dyn RandomSource) {
        self.geometry = RadarGeometry::new(canvas, self.data.labels.len());
    }

    fn step(&mut self, _tick: FrameTick, _rng: &mut dyn RandomSource) -> bool {
        self.drawn = self.progress.min(1.0);
        self.progress += PROGRESS_STEP;
        self.progress <= 1.0
    }

    fn paint(&self, surface: &mut dyn Surface) -> GlowResult<()> {
        surface.clear();
        self.paint_grid(surface)?;
        for ds in &self.data.datasets {
            self.paint_dataset(surface, ds)?;
        }
        Ok(())
    }
}

fn circle(center: Point, radius: f64) -> BezPath {
    use kurbo::Shape as _;
    kurbo::Circle::new(center, radius).to_path(0.1)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/radar.rs"]
mod tests;
