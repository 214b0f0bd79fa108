use crate::animation::ease::Ease;
use crate::animation::keys::KeyTrack;
use crate::engine::Effect;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, FrameTick, Point, Vec2};
use crate::foundation::error::{GlowError, GlowResult};
use crate::foundation::rng::RandomSource;
use crate::surface::{ColorStop, LinearGradient, Paint, Surface};

pub const SIZE_RANGE: (f64, f64) = (30.0, 130.0);
pub const DELAY_S_RANGE: (f64, f64) = (0.0, 5.0);
pub const DURATION_S_RANGE: (f64, f64) = (20.0, 30.0);
/// Opacity of a single bubble, before the layer opacity.
pub const BUBBLE_OPACITY: f64 = 0.3;

const BLUE: Rgba8 = Rgba8::rgb(0, 112, 243);
const PURPLE: Rgba8 = Rgba8::rgb(109, 40, 217);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackdropParams {
    pub count: usize,
    /// Opacity of the whole bubble layer.
    pub opacity: f64,
}

impl Default for BackdropParams {
    fn default() -> Self {
        Self {
            count: 15,
            opacity: 0.4,
        }
    }
}

impl BackdropParams {
    pub fn validate(&self) -> GlowResult<()> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(GlowError::validation("backdrop opacity must be in [0, 1]"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub size: f64,
    /// Resting top-left corner as a percentage of the canvas, each axis in `[0, 100)`.
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub color: Rgba8,
}

impl Bubble {
    /// Position within the current loop, in `[0, 1)`; 0 until the delay has passed.
    pub fn cycle_progress(&self, time_s: f64) -> f64 {
        if time_s < self.delay_s {
            return 0.0;
        }
        (time_s - self.delay_s).rem_euclid(self.duration_s) / self.duration_s
    }
}

/// Offset and scale of a bubble at one point of its loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubblePose {
    pub offset: Vec2,
    pub scale: f64,
}

/// The shared wander loop every bubble plays at its own speed.
#[derive(Clone, Debug, PartialEq)]
pub struct WanderTracks {
    pub dx: KeyTrack,
    pub dy: KeyTrack,
    pub scale: KeyTrack,
}

impl Default for WanderTracks {
    fn default() -> Self {
        let times = vec![0.0, 0.33, 0.66, 1.0];
        let track = |values: [f64; 4]| KeyTrack {
            times: times.clone(),
            values: values.to_vec(),
            ease: Ease::InOutQuad,
        };
        Self {
            dx: track([0.0, 30.0, -30.0, 0.0]),
            dy: track([0.0, -30.0, 30.0, 0.0]),
            scale: track([1.0, 1.1, 0.9, 1.0]),
        }
    }
}

impl WanderTracks {
    pub fn pose(&self, progress: f64) -> BubblePose {
        BubblePose {
            offset: Vec2::new(self.dx.sample(progress), self.dy.sample(progress)),
            scale: self.scale.sample(progress),
        }
    }
}

pub fn generate_bubbles(count: usize, rng: &mut dyn RandomSource) -> Vec<Bubble> {
    (0..count)
        .map(|i| {
            let size = rng.range(SIZE_RANGE.0, SIZE_RANGE.1);
            let left_pct = rng.range(0.0, 100.0);
            let top_pct = rng.range(0.0, 100.0);
            let delay_s = rng.range(DELAY_S_RANGE.0, DELAY_S_RANGE.1);
            let duration_s = rng.range(DURATION_S_RANGE.0, DURATION_S_RANGE.1);
            Bubble {
                size,
                left_pct,
                top_pct,
                delay_s,
                duration_s,
                color: if i % 2 == 0 { BLUE } else { PURPLE },
            }
        })
        .collect()
}

/// Slowly wandering translucent bubbles behind the page content.
#[derive(Clone, Debug)]
pub struct BackdropEffect {
    params: BackdropParams,
    tracks: WanderTracks,
    canvas: Canvas,
    time_s: f64,
    bubbles: Vec<Bubble>,
}

impl BackdropEffect {
    pub fn new(params: BackdropParams) -> GlowResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            tracks: WanderTracks::default(),
            canvas: Canvas::default(),
            time_s: 0.0,
            bubbles: Vec::new(),
        })
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn pose(&self, bubble: &Bubble) -> BubblePose {
        self.tracks.pose(bubble.cycle_progress(self.time_s))
    }

    /// Disc center, radius and 135° wash for `bubble` at the current time.
    pub fn sprite(&self, bubble: &Bubble) -> (Point, f64, Paint) {
        let pose = self.pose(bubble);
        let half = bubble.size / 2.0;
        let center = Point::new(
            bubble.left_pct / 100.0 * self.canvas.width_f64() + half,
            bubble.top_pct / 100.0 * self.canvas.height_f64() + half,
        ) + pose.offset;
        let r = half * pose.scale;
        let alpha = BUBBLE_OPACITY * self.params.opacity;
        let paint = Paint::Linear(LinearGradient {
            start: center - Vec2::new(r, r),
            end: center + Vec2::new(r, r),
            stops: vec![
                ColorStop::new(0.0, bubble.color.with_alpha_f(0.4 * alpha)),
                ColorStop::new(1.0, bubble.color.with_alpha_f(0.1 * alpha)),
            ],
        });
        (center, r, paint)
    }
}

impl Effect for BackdropEffect {
    fn name(&self) -> &'static str {
        "backdrop"
    }

    fn reset(&mut self, canvas: Canvas, rng: &mut dyn RandomSource) {
        self.canvas = canvas;
        self.time_s = 0.0;
        self.bubbles = generate_bubbles(self.params.count, rng);
    }

    // Bubbles are placed in percentages, so a resize only rescales them.
    fn resize(&mut self, canvas: Canvas, _rng: &mut dyn RandomSource) {
        self.canvas = canvas;
    }

    fn step(&mut self, tick: FrameTick, _rng: &mut dyn RandomSource) -> bool {
        self.time_s = tick.time_ms / 1000.0;
        true
    }

    fn paint(&self, surface: &mut dyn Surface) -> GlowResult<()> {
        use kurbo::Shape as _;

        surface.clear();
        for b in &self.bubbles {
            let (center, r, paint) = self.sprite(b);
            surface.fill_path(&kurbo::Circle::new(center, r).to_path(0.1), &paint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/backdrop.rs"]
mod tests;
