//! Easing curves, one-shot tweens and repeating oscillators.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Easing curves mapping linear progress to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed, no acceleration.
    #[default]
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end.
    EaseOut,
    /// Slow start, fast middle, slow end.
    EaseInOut,
    /// Cubic deceleration.
    OutCubic,
    /// Exponential deceleration; covers most of the distance early.
    OutExpo,
    /// CSS `ease`: `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,
}

impl Easing {
    /// Map a linear progress value (0.0..=1.0) to an eased value.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic bezier with endpoints (0, 0) and (1, 1) at
/// horizontal position `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let curve = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    // x(s) is monotonic for control points inside [0, 1], so bisection converges.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..32 {
        let mid = 0.5 * (lo + hi);
        if curve(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve(y1, y2, 0.5 * (lo + hi))
}

/// A one-shot interpolation from `from` to `to` over a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f64,
    elapsed: f64,
    easing: Easing,
}

impl Tween {
    /// Create a tween at its start value.
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.as_secs_f64(),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    /// Linear progress in `[0, 1]`. A zero-length tween is always complete.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration) as f32
        }
    }

    /// Current eased value.
    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    /// Whether the tween reached its end value.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Rewind to the start value.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// An endlessly repeating interpolation. With `yoyo`, every other cycle runs
/// backwards so the value swings between the endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Repeat {
    from: f32,
    to: f32,
    period: f64,
    elapsed: f64,
    easing: Easing,
    yoyo: bool,
}

impl Repeat {
    /// Create a repeating interpolation with the given cycle length.
    pub fn new(from: f32, to: f32, period: Duration, easing: Easing, yoyo: bool) -> Self {
        Self {
            from,
            to,
            period: period.as_secs_f64(),
            elapsed: 0.0,
            easing,
            yoyo,
        }
    }

    /// Advance by `dt` seconds. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        if self.period <= 0.0 {
            return self.to;
        }
        let cycles = self.elapsed / self.period;
        let mut t = cycles.fract() as f32;
        if self.yoyo && (cycles.floor() as u64) % 2 == 1 {
            t = 1.0 - t;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::OutCubic,
        Easing::OutExpo,
        Easing::Ease,
    ];

    #[test]
    fn test_easing_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-3, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        for easing in ALL {
            assert_eq!(easing.apply(-2.0), easing.apply(0.0));
            assert_eq!(easing.apply(3.0), easing.apply(1.0));
        }
    }

    #[test]
    fn test_easing_is_monotonic() {
        for easing in ALL {
            let mut last = easing.apply(0.0);
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= last - 1e-6, "{easing:?} decreased at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!(Easing::OutCubic.apply(0.3) > 0.3);
        assert!(Easing::OutExpo.apply(0.3) > Easing::OutCubic.apply(0.3));
        assert!(Easing::EaseIn.apply(0.3) < 0.3);
    }

    #[test]
    fn test_css_ease_shape() {
        // Front-loaded like CSS `ease`: past halfway at the midpoint.
        let mid = Easing::Ease.apply(0.5);
        assert!(mid > 0.75 && mid < 0.85, "ease(0.5) = {mid}");
        assert!(Easing::Ease.apply(0.1) < Easing::OutCubic.apply(0.1));
    }

    #[test]
    fn test_tween_progresses_and_finishes() {
        let mut tween = Tween::new(0.0, 10.0, Duration::from_secs(2), Easing::Linear);
        assert_eq!(tween.value(), 0.0);
        tween.advance(0.5);
        assert!((tween.value() - 2.5).abs() < 1e-5);
        assert!(!tween.is_finished());
        tween.advance(5.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn test_tween_ignores_bad_steps() {
        let mut tween = Tween::new(1.0, 0.0, Duration::from_secs(1), Easing::Linear);
        tween.advance(-1.0);
        tween.advance(f64::NAN);
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_zero_length_tween_is_complete() {
        let tween = Tween::new(0.0, 0.8, Duration::ZERO, Easing::OutCubic);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 0.8);
    }

    #[test]
    fn test_tween_reset() {
        let mut tween = Tween::new(0.0, 1.0, Duration::from_secs(1), Easing::Linear);
        tween.advance(1.0);
        tween.reset();
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_repeat_wraps() {
        let mut rep = Repeat::new(0.0, 1.0, Duration::from_secs(1), Easing::Linear, false);
        rep.advance(1.25);
        assert!((rep.value() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_repeat_yoyo_reverses() {
        let mut rep = Repeat::new(0.8, 1.1, Duration::from_secs(1), Easing::Linear, true);
        rep.advance(0.5);
        assert!((rep.value() - 0.95).abs() < 1e-5);
        rep.advance(0.75);
        // 1.25 s: second cycle runs backwards, a quarter of the way down.
        assert!((rep.value() - (1.1 - 0.075)).abs() < 1e-5);
        rep.advance(0.75);
        // 2.0 s: back at the start of a forward cycle.
        assert!((rep.value() - 0.8).abs() < 1e-5);
    }
}
