//! Starfield configuration with validation and RON loading.

use serde::{Deserialize, Serialize};

use crate::error::StarfieldError;
use crate::opacity::OpacityCurve;

/// Static per-effect constants for one starfield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of particles in the field.
    pub particle_count: u32,
    /// Far plane depth. Particles wrap back here after crossing the near plane.
    pub z_max: f32,
    /// Depth travelled per unit of animation time.
    pub speed: f32,
    /// Pinhole focal length. Larger values enlarge near particles more aggressively.
    pub focal_length: f32,
    /// Cosmetic multiplier applied to every projected scale.
    pub scale_factor: f32,
    /// Lower bound for projected scale (0 keeps the plain `max(0, ...)` clamp).
    pub min_scale: f32,
    /// Opacity over normalized depth.
    pub opacity: OpacityCurve,
    /// Random placement parameters.
    pub spawn: SpawnConfig,
    /// Faint lines joining paired particles.
    pub constellations: ConstellationConfig,
}

/// Sampling ranges used when the particle field is (re)generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Extra margin on each side of the viewport, as a multiple of its size.
    /// `1.0` samples x from `[-width, 2 * width]`.
    pub spread: f32,
    /// Base scale range `(min, max)`.
    pub size_range: (f32, f32),
    /// Rotation speeds are sampled from `[-max, max]`.
    pub max_rotation_speed: f32,
    /// Give every particle a fixed random rotation phase in `[0, TAU)`.
    pub random_phase: bool,
}

/// Constellation line settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationConfig {
    /// Emit lines at all.
    pub enabled: bool,
    /// Pair particle `i` with `i + 1` for every `stride`-th index.
    pub stride: u32,
    /// Lines vanish when their endpoints differ in depth by this much or more.
    pub max_depth_gap: f32,
    /// Multiplier on the endpoints' mean opacity.
    pub intensity: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 120,
            z_max: 1200.0,
            speed: 150.0,
            focal_length: 300.0,
            scale_factor: 1.0,
            min_scale: 0.0,
            opacity: OpacityCurve::default(),
            spawn: SpawnConfig::default(),
            constellations: ConstellationConfig::default(),
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            spread: 1.0,
            size_range: (0.2, 1.0),
            max_rotation_speed: 2.5,
            random_phase: false,
        }
    }
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            stride: 4,
            max_depth_gap: 100.0,
            intensity: 0.15,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), StarfieldError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(StarfieldError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), StarfieldError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StarfieldError::Negative { name, value })
    }
}

impl StarfieldConfig {
    /// Reject configurations the projection cannot honor.
    pub fn validate(&self) -> Result<(), StarfieldError> {
        if self.particle_count == 0 {
            return Err(StarfieldError::EmptyField);
        }
        positive("z_max", self.z_max)?;
        positive("speed", self.speed)?;
        positive("focal_length", self.focal_length)?;
        positive("scale_factor", self.scale_factor)?;
        non_negative("min_scale", self.min_scale)?;
        self.opacity.validate()?;
        self.spawn.validate()?;
        self.constellations.validate()
    }

    /// Parse and validate a RON description.
    pub fn from_ron_str(source: &str) -> Result<Self, StarfieldError> {
        let config: Self = ron::from_str(source).map_err(StarfieldError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Animation time for a particle to travel the full depth once.
    pub fn period(&self) -> f32 {
        self.z_max / self.speed
    }
}

impl SpawnConfig {
    fn validate(&self) -> Result<(), StarfieldError> {
        non_negative("spread", self.spread)?;
        let (min, max) = self.size_range;
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(StarfieldError::InvalidRange {
                name: "size",
                min,
                max,
            });
        }
        non_negative("max_rotation_speed", self.max_rotation_speed)
    }
}

impl ConstellationConfig {
    fn validate(&self) -> Result<(), StarfieldError> {
        if self.stride == 0 {
            return Err(StarfieldError::NonPositive {
                name: "stride",
                value: 0.0,
            });
        }
        non_negative("max_depth_gap", self.max_depth_gap)?;
        if !(0.0..=1.0).contains(&self.intensity) {
            return Err(StarfieldError::InvalidRange {
                name: "intensity",
                min: self.intensity,
                max: 1.0,
            });
        }
        Ok(())
    }
}
