//! Monotonic animation time scalar.

use horazion_starfield::AnimationState;

/// Animation time units per wall-clock second: 100 units every 80 seconds.
pub const DEFAULT_TIME_RATE: f64 = 100.0 / 80.0;

/// Converts wall-clock frame deltas into the animation time scalar fed to the
/// starfield. The scalar never decreases.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationClock {
    rate: f64,
    elapsed: f64,
}

impl AnimationClock {
    /// Create a clock at time zero. Non-positive or non-finite rates fall back
    /// to [`DEFAULT_TIME_RATE`].
    pub fn new(rate: f64) -> Self {
        let rate = if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            tracing::warn!("Invalid animation time rate {rate}, using {DEFAULT_TIME_RATE}");
            DEFAULT_TIME_RATE
        };
        Self { rate, elapsed: 0.0 }
    }

    /// Advance by `dt` wall-clock seconds. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Wall-clock seconds accumulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Time units per wall-clock second.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Current animation time scalar.
    pub fn time(&self) -> f32 {
        (self.elapsed * self.rate) as f32
    }

    /// Snapshot for one frame.
    pub fn state(&self, global_opacity: f32) -> AnimationState {
        AnimationState {
            time: self.time(),
            global_opacity,
        }
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_RATE)
    }
}
