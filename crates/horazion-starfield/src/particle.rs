//! Procedural particle placement.
//!
//! A field is generated once per viewport size from a seed and never mutated.
//! Resizing regenerates the whole set.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::StarfieldConfig;
use crate::projection::Viewport;

/// A single particle in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// World position. `z` is the depth at animation time zero.
    pub position: Vec3,
    /// Base scale at unit perspective.
    pub size: f32,
    /// Signed angular velocity in radians per unit of animation time.
    pub rotation_speed: f32,
    /// Fixed rotation offset in radians.
    pub phase: f32,
}

/// The immutable particle set for one viewport configuration.
#[derive(Debug, Clone)]
pub struct ParticleField {
    seed: u64,
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate a field. Deterministic for a given seed, viewport and config.
    pub fn generate(seed: u64, viewport: Viewport, config: &StarfieldConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let particles = (0..config.particle_count)
            .map(|_| spawn(&mut rng, viewport, config))
            .collect();

        Self {
            seed,
            viewport,
            particles,
        }
    }

    /// Regenerate the field if the viewport changed. Returns `true` when the
    /// particle set was replaced.
    pub fn resize(&mut self, viewport: Viewport, config: &StarfieldConfig) -> bool {
        if viewport == self.viewport && self.particles.len() == config.particle_count as usize {
            return false;
        }
        *self = Self::generate(self.seed, viewport, config);
        log::debug!(
            "Regenerated {} particles for {}x{} viewport",
            self.particles.len(),
            viewport.width,
            viewport.height
        );
        true
    }

    /// All particles, in generation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Viewport the field was generated for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Seed used for generation.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn spawn(rng: &mut ChaCha8Rng, viewport: Viewport, config: &StarfieldConfig) -> Particle {
    let spawn = &config.spawn;

    // Sample wider than the viewport so the edges stay populated once
    // perspective pulls far particles toward the center.
    let x = rng.random_range(-spawn.spread * viewport.width..=(1.0 + spawn.spread) * viewport.width);
    let y =
        rng.random_range(-spawn.spread * viewport.height..=(1.0 + spawn.spread) * viewport.height);
    let z = rng.random_range(0.0..=config.z_max);

    let (size_min, size_max) = spawn.size_range;
    let size = rng.random_range(size_min..=size_max);
    let rotation_speed =
        rng.random_range(-spawn.max_rotation_speed..=spawn.max_rotation_speed);
    let phase = if spawn.random_phase {
        rng.random::<f32>() * std::f32::consts::TAU
    } else {
        0.0
    };

    Particle {
        position: Vec3::new(x, y, z),
        size,
        rotation_speed,
        phase,
    }
}
