//! Pinhole projection of depth-travelling particles onto the screen.
//!
//! Everything here is a pure function of the particle, the animation time, the
//! viewport and the configuration. Nothing is mutated, so a frame can project
//! every particle against one shared time value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::StarfieldConfig;
use crate::error::StarfieldError;
use crate::particle::Particle;

/// Depth below which perspective stops growing.
pub const MIN_PROJECTION_DEPTH: f32 = 1.0;

/// Display area the field is projected into, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, rejecting non-positive or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self, StarfieldError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(StarfieldError::InvalidViewport { width, height })
        }
    }

    /// Center of the viewport. Projection converges toward this point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Per-frame animation values shared by every particle in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Monotonic animation time scalar.
    pub time: f32,
    /// Scene-wide opacity multiplier applied by the renderer on top of each
    /// particle's own opacity.
    pub global_opacity: f32,
}

impl AnimationState {
    /// Fully visible state at the given time.
    pub fn at(time: f32) -> Self {
        Self {
            time,
            global_opacity: 1.0,
        }
    }

    /// Particle opacity after the global multiplier.
    pub fn effective_opacity(&self, projected: &ProjectedState) -> f32 {
        (projected.opacity * self.global_opacity).clamp(0.0, 1.0)
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::at(0.0)
    }
}

/// Screen-space transform of one particle for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedState {
    /// Projected position in logical pixels.
    pub screen: Vec2,
    /// Sprite scale.
    pub scale: f32,
    /// Opacity in `[0, 1]` from the depth curve.
    pub opacity: f32,
    /// Sprite rotation in radians.
    pub rotation: f32,
    /// Depth after wraparound, in `[0, z_max]`.
    pub depth: f32,
}

/// Fold a travelled depth back into `(0, z_max]`.
///
/// Values already inside the range pass through untouched. Anything at or
/// behind the viewer re-enters from the far plane, shifted by whole multiples
/// of `z_max`, so motion is periodic with period `z_max`.
pub fn wrap_depth(depth: f32, z_max: f32) -> f32 {
    if depth > 0.0 && depth <= z_max {
        return depth;
    }
    (z_max - (z_max - depth).rem_euclid(z_max)).clamp(0.0, z_max)
}

/// Depth of a particle at the given animation time, after wraparound.
pub fn current_depth(particle: &Particle, time: f32, config: &StarfieldConfig) -> f32 {
    wrap_depth(particle.position.z - time * config.speed, config.z_max)
}

/// Perspective factor for a depth. Depth is clamped so near particles never
/// divide by zero.
pub fn perspective(depth: f32, focal_length: f32) -> f32 {
    focal_length / depth.max(MIN_PROJECTION_DEPTH)
}

/// Project one particle.
pub fn project(
    particle: &Particle,
    time: f32,
    viewport: Viewport,
    config: &StarfieldConfig,
) -> ProjectedState {
    let depth = current_depth(particle, time, config);
    let perspective = perspective(depth, config.focal_length);

    let center = viewport.center();
    let offset = Vec2::new(particle.position.x, particle.position.y) - center;
    let screen = offset * perspective + center;

    let scale = (perspective * particle.size * config.scale_factor)
        .max(config.min_scale)
        .max(0.0);
    let opacity = config.opacity.sample(depth / config.z_max).clamp(0.0, 1.0);
    let rotation = time * particle.rotation_speed + particle.phase;

    ProjectedState {
        screen,
        scale,
        opacity,
        rotation,
        depth,
    }
}
