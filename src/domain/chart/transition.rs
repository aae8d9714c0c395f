//! Time-based interpolation of animated scene attributes.
//!
//! A tween is a pure function of the clock, so sampling never mutates it.
//! Retargeting restarts from whatever value is currently on screen: the last
//! writer wins and nothing is queued.

use serde::{Deserialize, Serialize};

use super::value_objects::LinearScale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    /// A tween that is already at rest on `value`.
    pub fn settled(value: f64, easing: Easing) -> Self {
        Self { from: value, to: value, start_ms: 0.0, duration_ms: 0.0, easing }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        self.progress(now_ms) < 1.0
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    /// Head for `to`, starting from the value on screen at `now_ms`.
    pub fn retarget(&mut self, to: f64, now_ms: f64, duration_ms: f64) {
        self.from = self.value_at(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
    }
}

/// Animated domain of a scale; the pixel range is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTween {
    lo: Tween,
    hi: Tween,
    range: (f64, f64),
}

impl ScaleTween {
    pub fn settled(scale: &LinearScale, easing: Easing) -> Self {
        let (lo, hi) = scale.domain();
        Self { lo: Tween::settled(lo, easing), hi: Tween::settled(hi, easing), range: scale.range() }
    }

    pub fn scale_at(&self, now_ms: f64) -> LinearScale {
        LinearScale::new((self.lo.value_at(now_ms), self.hi.value_at(now_ms)), self.range)
    }

    pub fn target_scale(&self) -> LinearScale {
        LinearScale::new((self.lo.target(), self.hi.target()), self.range)
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        self.lo.is_active(now_ms) || self.hi.is_active(now_ms)
    }

    pub fn retarget(&mut self, scale: &LinearScale, now_ms: f64, duration_ms: f64) {
        let (lo, hi) = scale.domain();
        self.lo.retarget(lo, now_ms, duration_ms);
        self.hi.retarget(hi, now_ms, duration_ms);
        self.range = scale.range();
    }
}
