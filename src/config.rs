//! JSON scene description for headless rendering.
//!
//! ```json
//! { "canvas": { "width": 800, "height": 600 }, "seed": 7, "effect": { "kind": "blob" } }
//! ```

use std::path::Path;

use crate::blob::{BlobEffect, BlobParams};
use crate::effects::{
    AnyEffect, BackdropEffect, BackdropParams, FieldKind, ParticleParams, ParticlesEffect,
    RadarData, RadarEffect,
};
use crate::foundation::core::{Canvas, Fps, Rect};
use crate::foundation::error::{GlowError, GlowResult};

/// Environment variable that replaces the configured seed.
pub const SEED_ENV: &str = "GLOWFIELD_SEED";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Blob,
    Radar,
    Particles,
    Backdrop,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectConfig {
    Blob(BlobParams),
    Radar {
        #[serde(default)]
        data: RadarData,
    },
    Particles {
        #[serde(default)]
        params: ParticleParams,
        /// Field that is focused from the first frame.
        #[serde(default)]
        field: Option<FieldKind>,
        #[serde(default)]
        anchor: Option<Rect>,
    },
    Backdrop(BackdropParams),
}

impl EffectConfig {
    /// Default parameters for `kind`.
    pub fn defaults(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Blob => Self::Blob(BlobParams::default()),
            EffectKind::Radar => Self::Radar {
                data: RadarData::default(),
            },
            EffectKind::Particles => Self::Particles {
                params: ParticleParams::default(),
                field: Some(FieldKind::Name),
                anchor: Some(Rect::new(200.0, 260.0, 600.0, 300.0)),
            },
            EffectKind::Backdrop => Self::Backdrop(BackdropParams::default()),
        }
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Blob(_) => EffectKind::Blob,
            Self::Radar { .. } => EffectKind::Radar,
            Self::Particles { .. } => EffectKind::Particles,
            Self::Backdrop(_) => EffectKind::Backdrop,
        }
    }

    pub fn validate(&self) -> GlowResult<()> {
        match self {
            Self::Blob(p) => p.validate(),
            Self::Radar { data } => data.validate(),
            Self::Particles { params, anchor, .. } => {
                params.validate()?;
                if let Some(r) = anchor
                    && (!r.is_finite() || r.width() < 0.0 || r.height() < 0.0)
                {
                    return Err(GlowError::validation(
                        "particle anchor must be finite and not inverted",
                    ));
                }
                Ok(())
            }
            Self::Backdrop(p) => p.validate(),
        }
    }

    /// Instantiate the configured effect.
    pub fn build(&self) -> GlowResult<AnyEffect> {
        self.validate()?;
        Ok(match self {
            Self::Blob(p) => BlobEffect::new(*p)?.into(),
            Self::Radar { data } => RadarEffect::new(data.clone())?.into(),
            Self::Particles {
                params,
                field,
                anchor,
            } => {
                let mut fx = ParticlesEffect::new(*params)?;
                fx.set_active_field(*field, *anchor);
                fx.into()
            }
            Self::Backdrop(p) => BackdropEffect::new(*p)?.into(),
        })
    }
}

fn default_frames() -> u64 {
    120
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    pub canvas: Canvas,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub fps: Fps,
    /// Frames rendered by a full run.
    #[serde(default = "default_frames")]
    pub frames: u64,
    /// Straight RGBA background; transparent when absent.
    #[serde(default)]
    pub clear_rgba: Option<[u8; 4]>,
    pub effect: EffectConfig,
}

impl SceneConfig {
    /// An 800x600, 60 fps, two-second scene of `kind` with default parameters.
    pub fn example(kind: EffectKind) -> Self {
        Self {
            canvas: Canvas::new(800, 600),
            seed: 1,
            fps: Fps::default(),
            frames: default_frames(),
            clear_rgba: Some([255, 255, 255, 255]),
            effect: EffectConfig::defaults(kind),
        }
    }

    /// Parse and validate. Environment overrides are not applied.
    pub fn from_json_str(s: &str) -> GlowResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| GlowError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a JSON file and apply environment overrides.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> GlowResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GlowError::config(format!("read scene config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_json_str(&text)?.with_overrides(|k| std::env::var(k).ok())?;
        tracing::debug!(effect = ?cfg.effect.kind(), seed = cfg.seed, "scene config loaded");
        Ok(cfg)
    }

    /// Apply overrides looked up through `lookup` (normally the process environment).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> GlowResult<Self> {
        if let Some(raw) = lookup(SEED_ENV) {
            self.seed = raw.trim().parse().map_err(|_| {
                GlowError::config(format!("{SEED_ENV} must be an unsigned integer, got '{raw}'"))
            })?;
            tracing::debug!(seed = self.seed, "seed overridden from environment");
        }
        Ok(self)
    }

    pub fn validate(&self) -> GlowResult<()> {
        if self.canvas.is_empty() {
            return Err(GlowError::validation("canvas width and height must be > 0"));
        }
        self.canvas.raster_dims()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if self.frames == 0 {
            return Err(GlowError::validation("frames must be > 0"));
        }
        self.effect.validate()
    }

    pub fn to_json_pretty(&self) -> GlowResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GlowError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/scene.rs"]
mod tests;
