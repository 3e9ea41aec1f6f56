//! Horizon glow: a thin line across the middle of the screen that widens from
//! the center and fades in while the starfield starts moving.

use std::time::Duration;

use horazion_starfield::Viewport;
use serde::{Deserialize, Serialize};

use crate::easing::{Easing, Tween};

/// Peak opacity of the glow.
pub const GLOW_PEAK_OPACITY: f32 = 0.8;
/// Height of the blurred glow band in logical pixels.
pub const GLOW_HEIGHT: f32 = 4.0;
/// Height of the bright core line in logical pixels.
pub const CORE_HEIGHT: f32 = 1.0;

const WIDEN_DURATION: Duration = Duration::from_millis(3000);
const FADE_IN_DURATION: Duration = Duration::from_millis(2500);

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

/// Everything a renderer needs to draw the horizon for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizonFrame {
    /// Blurred band.
    pub glow: Rect,
    /// Bright line on top of the band.
    pub core: Rect,
    /// Opacity of both.
    pub opacity: f32,
}

/// Animated horizon line state.
#[derive(Clone, Debug)]
pub struct HorizonGlow {
    viewport: Viewport,
    widen: Tween,
    fade_in: Tween,
}

impl HorizonGlow {
    /// Create a collapsed, transparent horizon.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            widen: Tween::new(0.0, 1.0, WIDEN_DURATION, Easing::OutExpo),
            fade_in: Tween::new(0.0, GLOW_PEAK_OPACITY, FADE_IN_DURATION, Easing::OutCubic),
        }
    }

    /// Advance both tweens by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.widen.advance(dt);
        self.fade_in.advance(dt);
    }

    /// Follow a display resize. Animation progress is kept.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Current band width in logical pixels.
    pub fn width(&self) -> f32 {
        self.widen.value() * self.viewport.width
    }

    /// Current opacity.
    pub fn opacity(&self) -> f32 {
        self.fade_in.value()
    }

    /// Blurred band, centered horizontally and straddling the vertical middle.
    pub fn glow_rect(&self) -> Rect {
        let w = self.width();
        Rect {
            x: (self.viewport.width - w) * 0.5,
            y: self.viewport.height * 0.5 - GLOW_HEIGHT * 0.5,
            w,
            h: GLOW_HEIGHT,
        }
    }

    /// Core line, starting at the vertical middle.
    pub fn core_rect(&self) -> Rect {
        Rect {
            y: self.viewport.height * 0.5,
            h: CORE_HEIGHT,
            ..self.glow_rect()
        }
    }

    /// Snapshot for one frame.
    pub fn frame(&self) -> HorizonFrame {
        HorizonFrame {
            glow: self.glow_rect(),
            core: self.core_rect(),
            opacity: self.opacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Viewport {
        Viewport::new(390.0, 844.0).unwrap()
    }

    #[test]
    fn test_starts_collapsed_and_transparent() {
        let horizon = HorizonGlow::new(phone());
        let frame = horizon.frame();
        assert_eq!(frame.glow.w, 0.0);
        assert_eq!(frame.glow.x, 195.0);
        assert_eq!(frame.opacity, 0.0);
    }

    #[test]
    fn test_reaches_full_width_and_peak_opacity() {
        let mut horizon = HorizonGlow::new(phone());
        horizon.advance(3.0);
        let frame = horizon.frame();
        assert_eq!(frame.glow.w, 390.0);
        assert_eq!(frame.glow.x, 0.0);
        assert!((frame.opacity - GLOW_PEAK_OPACITY).abs() < 1e-6);
    }

    #[test]
    fn test_rects_are_vertically_centered() {
        let mut horizon = HorizonGlow::new(phone());
        horizon.advance(1.0);
        let glow = horizon.glow_rect();
        let core = horizon.core_rect();
        assert_eq!(glow.y, 420.0);
        assert_eq!(glow.h, GLOW_HEIGHT);
        assert_eq!(core.y, 422.0);
        assert_eq!(core.h, CORE_HEIGHT);
        assert_eq!(core.w, glow.w);
        assert!((glow.x * 2.0 + glow.w - 390.0).abs() < 1e-3);
    }

    #[test]
    fn test_widens_faster_than_linear() {
        let mut horizon = HorizonGlow::new(phone());
        horizon.advance(0.6);
        assert!(horizon.width() > 0.2 * 390.0);
    }

    #[test]
    fn test_resize_keeps_progress() {
        let mut horizon = HorizonGlow::new(phone());
        horizon.advance(5.0);
        horizon.resize(Viewport::new(844.0, 390.0).unwrap());
        assert_eq!(horizon.width(), 844.0);
        assert_eq!(horizon.core_rect().y, 195.0);
    }
}
