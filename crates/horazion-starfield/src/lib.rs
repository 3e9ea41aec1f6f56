//! Starfield projection: procedurally placed particles travelling along the
//! depth axis, projected through a pinhole camera each frame to simulate
//! endless forward motion.

pub mod config;
pub mod constellation;
pub mod error;
pub mod opacity;
pub mod particle;
pub mod preset;
pub mod projection;
pub mod sprite;
pub mod starfield;

pub use config::{ConstellationConfig, SpawnConfig, StarfieldConfig};
pub use constellation::{ConstellationLine, collect_lines, constellation_pairs, link_opacity};
pub use error::StarfieldError;
pub use opacity::OpacityCurve;
pub use particle::{Particle, ParticleField};
pub use preset::StarfieldPreset;
pub use projection::{
    AnimationState, MIN_PROJECTION_DEPTH, ProjectedState, Viewport, current_depth, perspective,
    project, wrap_depth,
};
pub use sprite::{STAR_OUTLINE, STAR_SIZE, sprite_transform, star_outline};
pub use starfield::Starfield;
