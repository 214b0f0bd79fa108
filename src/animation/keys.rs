use crate::{
    animation::ease::Ease,
    foundation::error::{GlowError, GlowResult},
};

/// Scalar keyframes placed at normalized times within one cycle.
///
/// `times` are sorted and lie in `[0, 1]`; `values[i]` is reached at `times[i]`. The ease shapes
/// every segment between adjacent keys.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyTrack {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
    pub ease: Ease,
}

impl KeyTrack {
    pub fn new(times: Vec<f64>, values: Vec<f64>, ease: Ease) -> GlowResult<Self> {
        let track = Self {
            times,
            values,
            ease,
        };
        track.validate()?;
        Ok(track)
    }

    pub fn validate(&self) -> GlowResult<()> {
        if self.times.is_empty() {
            return Err(GlowError::validation("KeyTrack must have at least one key"));
        }
        if self.times.len() != self.values.len() {
            return Err(GlowError::validation(format!(
                "KeyTrack has {} times but {} values",
                self.times.len(),
                self.values.len()
            )));
        }
        if !self.times.iter().all(|t| (0.0..=1.0).contains(t)) {
            return Err(GlowError::validation("KeyTrack times must lie in [0, 1]"));
        }
        if !self.times.windows(2).all(|w| w[0] <= w[1]) {
            return Err(GlowError::validation("KeyTrack times must be sorted"));
        }
        Ok(())
    }

    /// Sample at cycle progress `p` (clamped to `[0, 1]`).
    ///
    /// A track built by hand without keys samples as `0.0`. Unpaired trailing times or values
    /// are ignored.
    pub fn sample(&self, p: f64) -> f64 {
        let n = self.times.len().min(self.values.len());
        if n == 0 {
            return 0.0;
        }
        let p = p.clamp(0.0, 1.0);
        let idx = self.times[..n].partition_point(|&t| t <= p);

        if idx == 0 {
            return self.values[0];
        }
        if idx >= n {
            return self.values[n - 1];
        }

        let (t0, t1) = (self.times[idx - 1], self.times[idx]);
        let (v0, v1) = (self.values[idx - 1], self.values[idx]);
        let span = t1 - t0;
        if span <= 0.0 {
            return v0;
        }
        let te = self.ease.apply((p - t0) / span);
        v0 + (v1 - v0) * te
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keys.rs"]
mod tests;
