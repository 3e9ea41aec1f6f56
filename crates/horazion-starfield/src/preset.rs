//! Named starfield looks. Each preset is only a [`StarfieldConfig`]; the
//! projection engine is shared.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{ConstellationConfig, SpawnConfig, StarfieldConfig};
use crate::error::StarfieldError;
use crate::opacity::OpacityCurve;

/// Built-in starfield presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarfieldPreset {
    /// Slow, majestic travel with constellation lines. The launch splash.
    #[default]
    Horazion,
    /// Fast, deep field with randomly phased sprites.
    Warp,
    /// Barely moving background for marketing pages.
    Drift,
    /// Short intro travel.
    Intro,
}

impl StarfieldPreset {
    /// Every preset, in declaration order.
    pub const ALL: [StarfieldPreset; 4] = [
        StarfieldPreset::Horazion,
        StarfieldPreset::Warp,
        StarfieldPreset::Drift,
        StarfieldPreset::Intro,
    ];

    /// Lowercase name used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            StarfieldPreset::Horazion => "horazion",
            StarfieldPreset::Warp => "warp",
            StarfieldPreset::Drift => "drift",
            StarfieldPreset::Intro => "intro",
        }
    }

    /// The configuration for this preset.
    pub fn config(&self) -> StarfieldConfig {
        match self {
            StarfieldPreset::Horazion => StarfieldConfig {
                particle_count: 150,
                z_max: 1200.0,
                speed: 120.0,
                focal_length: 400.0,
                scale_factor: 1.0,
                min_scale: 0.05,
                opacity: OpacityCurve::new(vec![
                    (0.0, 0.0),
                    (0.02, 1.0),
                    (1.0 / 3.0, 1.0),
                    (1.0, 0.0),
                ]),
                spawn: SpawnConfig {
                    spread: 1.0,
                    size_range: (0.2, 1.0),
                    max_rotation_speed: 2.5,
                    random_phase: false,
                },
                constellations: ConstellationConfig {
                    enabled: true,
                    stride: 4,
                    max_depth_gap: 100.0,
                    intensity: 0.15,
                },
            },
            StarfieldPreset::Warp => StarfieldConfig {
                particle_count: 200,
                z_max: 2000.0,
                speed: 150.0,
                focal_length: 300.0,
                scale_factor: 1.2,
                min_scale: 0.0,
                opacity: OpacityCurve::fade_in_out(0.1, 0.5, 0.5),
                spawn: SpawnConfig {
                    spread: 1.0,
                    size_range: (0.2, 1.0),
                    max_rotation_speed: 1.0,
                    random_phase: true,
                },
                constellations: ConstellationConfig::default(),
            },
            StarfieldPreset::Drift => StarfieldConfig {
                particle_count: 80,
                z_max: 1200.0,
                speed: 8.0,
                focal_length: 350.0,
                scale_factor: 0.8,
                min_scale: 0.0,
                opacity: OpacityCurve::fade_in_out(0.15, 0.7, 0.4),
                spawn: SpawnConfig {
                    spread: 0.5,
                    size_range: (0.2, 0.8),
                    max_rotation_speed: 0.5,
                    random_phase: true,
                },
                constellations: ConstellationConfig::default(),
            },
            StarfieldPreset::Intro => StarfieldConfig::default(),
        }
    }
}

impl fmt::Display for StarfieldPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StarfieldPreset {
    type Err = StarfieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StarfieldError::UnknownPreset(s.to_string()))
    }
}
