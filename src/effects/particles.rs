use crate::animation::ease::Ease;
use crate::engine::Effect;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Canvas, FrameTick, Point, Rect, Vec2};
use crate::foundation::error::{GlowError, GlowResult};
use crate::foundation::rng::RandomSource;
use crate::surface::{Paint, Surface};

pub const SIZE_RANGE: (f64, f64) = (4.0, 10.0);
pub const OPACITY_RANGE: (f64, f64) = (0.2, 0.8);
pub const LIFETIME_MS_RANGE: (f64, f64) = (2000.0, 5000.0);
/// Spawn speed per axis is `(r - 0.5) * SPAWN_SPEED`.
pub const SPAWN_SPEED: f64 = 1.5;
pub const PULSE_PERIOD_MS: f64 = 2000.0;

/// Form field a particle stream belongs to; decides the particle color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKind {
    pub const fn color(self) -> Rgba8 {
        match self {
            Self::Name => Rgba8::rgb(0x00, 0x70, 0xf3),
            Self::Email => Rgba8::rgb(0x6d, 0x28, 0xd9),
            Self::Subject => Rgba8::rgb(0x00, 0xc5, 0x8e),
            Self::Message => Rgba8::rgb(0xff, 0x40, 0x81),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParticleParams {
    /// Particles spawned at once when a field becomes active.
    pub burst: usize,
    pub spawn_interval_ms: f64,
    /// Per-axis speed limit.
    pub max_speed: f64,
    /// Per-axis random velocity nudge applied every frame is `(r - 0.5) * jitter`.
    pub jitter: f64,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            burst: 5,
            spawn_interval_ms: 200.0,
            max_speed: 2.0,
            jitter: 0.1,
        }
    }
}

impl ParticleParams {
    pub fn validate(&self) -> GlowResult<()> {
        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms <= 0.0 {
            return Err(GlowError::validation("spawn_interval_ms must be finite and > 0"));
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(GlowError::validation("max_speed must be finite and >= 0"));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(GlowError::validation("jitter must be finite and >= 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Top-left corner of the particle's bounding square.
    pub pos: Point,
    pub velocity: Vec2,
    pub size: f64,
    pub color: Rgba8,
    pub opacity: f64,
    pub born_ms: f64,
    pub lifetime_ms: f64,
}

impl Particle {
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.born_ms).max(0.0)
    }

    pub fn expired(&self, now_ms: f64) -> bool {
        now_ms - self.born_ms >= self.lifetime_ms
    }

    /// `(scale, opacity factor)` of the breathing pulse at `age_ms`.
    pub fn pulse(age_ms: f64) -> (f64, f64) {
        let phase = age_ms.rem_euclid(PULSE_PERIOD_MS) / PULSE_PERIOD_MS;
        let t = if phase < 0.5 {
            phase * 2.0
        } else {
            (1.0 - phase) * 2.0
        };
        let e = Ease::InOutQuad.apply(t);
        (1.0 + 0.2 * e, 1.0 + 0.5 * e)
    }
}

/// Draw one particle for `kind`, or `None` when there is nowhere to put it.
///
/// With an anchor the particle starts in the lower half of the anchor rect; without one it
/// starts at the canvas center.
pub fn spawn_particle(
    canvas: Canvas,
    kind: FieldKind,
    anchor: Option<Rect>,
    now_ms: f64,
    rng: &mut dyn RandomSource,
) -> Option<Particle> {
    if canvas.is_empty() {
        return None;
    }
    let pos = match anchor {
        Some(r) => {
            let x = r.x0 + rng.next_f64() * r.width();
            let y = r.y0 + rng.next_f64() * r.height() / 2.0 + r.height() / 2.0;
            Point::new(x, y)
        }
        None => canvas.center(),
    };
    let size = rng.range(SIZE_RANGE.0, SIZE_RANGE.1);
    let vx = (rng.next_f64() - 0.5) * SPAWN_SPEED;
    let vy = (rng.next_f64() - 0.5) * SPAWN_SPEED;
    let opacity = rng.range(OPACITY_RANGE.0, OPACITY_RANGE.1);
    let lifetime_ms = rng.range(LIFETIME_MS_RANGE.0, LIFETIME_MS_RANGE.1);
    Some(Particle {
        pos,
        velocity: Vec2::new(vx, vy),
        size,
        color: kind.color(),
        opacity,
        born_ms: now_ms,
        lifetime_ms,
    })
}

/// Move one particle a frame, bouncing off the canvas edges with a random per-axis nudge
/// capped at the speed limit.
pub fn drift(p: &mut Particle, canvas: Canvas, params: &ParticleParams, rng: &mut dyn RandomSource) {
    let (w, h) = (canvas.width_f64(), canvas.height_f64());
    let next = p.pos + p.velocity;
    let mut v = p.velocity;
    if next.x <= 0.0 || next.x >= w {
        v.x = -v.x;
    }
    if next.y <= 0.0 || next.y >= h {
        v.y = -v.y;
    }
    v.x += (rng.next_f64() - 0.5) * params.jitter;
    v.y += (rng.next_f64() - 0.5) * params.jitter;
    v.x = v.x.clamp(-params.max_speed, params.max_speed);
    v.y = v.y.clamp(-params.max_speed, params.max_speed);
    p.pos = next;
    p.velocity = v;
}

/// Particles streaming out of whichever form field has focus.
#[derive(Clone, Debug)]
pub struct ParticlesEffect {
    params: ParticleParams,
    canvas: Canvas,
    active: Option<(FieldKind, Option<Rect>)>,
    burst_pending: usize,
    next_spawn_ms: Option<f64>,
    now_ms: f64,
    particles: Vec<Particle>,
}

impl ParticlesEffect {
    pub fn new(params: ParticleParams) -> GlowResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            canvas: Canvas::default(),
            active: None,
            burst_pending: 0,
            next_spawn_ms: None,
            now_ms: 0.0,
            particles: Vec::new(),
        })
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn active_field(&self) -> Option<FieldKind> {
        self.active.map(|(k, _)| k)
    }

    /// Switch the emitting field. `anchor` is the field's box in surface pixels.
    ///
    /// Activating (or switching) queues a burst and restarts the spawn clock. `None` stops
    /// spawning; live particles finish their lifetimes.
    pub fn set_active_field(&mut self, field: Option<FieldKind>, anchor: Option<Rect>) {
        self.active = field.map(|k| (k, anchor));
        self.next_spawn_ms = None;
        self.burst_pending = if field.is_some() { self.params.burst } else { 0 };
        tracing::debug!(?field, "active field changed");
    }

    fn spawn_due(&mut self, rng: &mut dyn RandomSource) {
        let Some((kind, anchor)) = self.active else {
            return;
        };
        let interval = self.params.spawn_interval_ms;
        let mut due = std::mem::take(&mut self.burst_pending);
        let mut next = self.next_spawn_ms.unwrap_or(self.now_ms + interval);
        if self.now_ms >= next {
            // Ticks missed during a frame gap are dropped rather than replayed.
            due += 1;
            next += (((self.now_ms - next) / interval).floor() + 1.0) * interval;
        }
        self.next_spawn_ms = Some(next);

        for _ in 0..due {
            if let Some(p) = spawn_particle(self.canvas, kind, anchor, self.now_ms, rng) {
                self.particles.push(p);
            }
        }
    }
}

impl Effect for ParticlesEffect {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn reset(&mut self, canvas: Canvas, _rng: &mut dyn RandomSource) {
        self.canvas = canvas;
        self.particles.clear();
        self.next_spawn_ms = None;
        self.burst_pending = if self.active.is_some() { self.params.burst } else { 0 };
    }

    // Live particles survive a resize; only the bounce box changes.
    fn resize(&mut self, canvas: Canvas, _rng: &mut dyn RandomSource) {
        self.canvas = canvas;
    }

    fn step(&mut self, tick: FrameTick, rng: &mut dyn RandomSource) -> bool {
        self.now_ms = tick.time_ms;
        let now = self.now_ms;
        self.particles.retain(|p| !p.expired(now));
        for p in &mut self.particles {
            drift(p, self.canvas, &self.params, rng);
        }
        self.spawn_due(rng);
        self.active.is_some() || !self.particles.is_empty()
    }

    fn paint(&self, surface: &mut dyn Surface) -> GlowResult<()> {
        use kurbo::Shape as _;

        surface.clear();
        for p in &self.particles {
            let (scale, fade) = Particle::pulse(p.age_ms(self.now_ms));
            let half = p.size / 2.0;
            let center = p.pos + Vec2::new(half, half);
            let disc: BezPath = kurbo::Circle::new(center, half * scale).to_path(0.1);
            let color = p.color.with_alpha_f((p.opacity * fade).min(1.0));
            surface.fill_path(&disc, &Paint::Solid(color))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/particles.rs"]
mod tests;
