//! Spinning, pulsing star used as a loading indicator.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec2;
use horazion_starfield::{ProjectedState, star_outline};
use serde::{Deserialize, Serialize};

use crate::easing::{Easing, Repeat};

/// Default indicator edge length in logical pixels.
pub const DEFAULT_LOADING_STAR_SIZE: f32 = 48.0;

/// Pose of the indicator for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingStarPose {
    /// Center of the indicator box.
    pub center: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Pulse scale.
    pub scale: f32,
}

/// A star spinning once every three seconds while pulsing between 0.8 and 1.1.
#[derive(Clone, Debug)]
pub struct LoadingStar {
    size: f32,
    spin: Repeat,
    pulse: Repeat,
}

impl LoadingStar {
    /// Create an indicator occupying a `size` x `size` box.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            spin: Repeat::new(0.0, TAU, Duration::from_millis(3000), Easing::Linear, false),
            pulse: Repeat::new(0.8, 1.1, Duration::from_millis(1000), Easing::EaseInOut, true),
        }
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.spin.advance(dt);
        self.pulse.advance(dt);
    }

    /// Edge length of the indicator box.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Current pose.
    pub fn pose(&self) -> LoadingStarPose {
        LoadingStarPose {
            center: Vec2::splat(self.size * 0.5),
            rotation: self.spin.value(),
            scale: self.pulse.value(),
        }
    }

    /// Star outline in the indicator's local box coordinates.
    pub fn outline(&self) -> [Vec2; 8] {
        let pose = self.pose();
        star_outline(&ProjectedState {
            screen: pose.center,
            scale: pose.scale,
            rotation: pose.rotation,
            opacity: 1.0,
            depth: 0.0,
        })
    }
}

impl Default for LoadingStar {
    fn default() -> Self {
        Self::new(DEFAULT_LOADING_STAR_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pose() {
        let star = LoadingStar::default();
        let pose = star.pose();
        assert_eq!(pose.center, Vec2::splat(24.0));
        assert_eq!(pose.rotation, 0.0);
        assert!((pose.scale - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_spin_wraps_every_three_seconds() {
        let mut star = LoadingStar::default();
        star.advance(1.5);
        assert!((star.pose().rotation - TAU * 0.5).abs() < 1e-4);
        star.advance(1.5);
        assert!(star.pose().rotation.abs() < 1e-4);
    }

    #[test]
    fn test_pulse_stays_in_range() {
        let mut star = LoadingStar::default();
        for _ in 0..300 {
            star.advance(1.0 / 60.0);
            let scale = star.pose().scale;
            assert!((0.8 - 1e-5..=1.1 + 1e-5).contains(&scale), "scale {scale}");
        }
    }

    #[test]
    fn test_pulse_peaks_after_one_second() {
        let mut star = LoadingStar::default();
        star.advance(0.999);
        assert!(star.pose().scale > 1.09);
    }

    #[test]
    fn test_outline_fits_box() {
        let mut star = LoadingStar::new(48.0);
        star.advance(0.77);
        for p in star.outline() {
            assert!((0.0..=48.0).contains(&p.x) && (0.0..=48.0).contains(&p.y));
        }
    }
}
