//! The per-frame starfield engine: owns a validated config, the particle field
//! and reusable output buffers, and projects the whole field against one
//! [`AnimationState`] per frame.

use crate::config::StarfieldConfig;
use crate::constellation::{ConstellationLine, collect_lines};
use crate::error::StarfieldError;
use crate::particle::{Particle, ParticleField};
use crate::preset::StarfieldPreset;
use crate::projection::{AnimationState, ProjectedState, Viewport, project};

/// A configured starfield for one viewport.
pub struct Starfield {
    config: StarfieldConfig,
    field: ParticleField,
    projected: Vec<ProjectedState>,
    lines: Vec<ConstellationLine>,
}

impl Starfield {
    /// Validate the config and generate the initial particle field.
    pub fn new(
        config: StarfieldConfig,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, StarfieldError> {
        config.validate()?;
        let field = ParticleField::generate(seed, viewport, &config);
        log::debug!(
            "Starfield created: {} particles, z_max {}, speed {}",
            field.len(),
            config.z_max,
            config.speed
        );
        Ok(Self {
            projected: Vec::with_capacity(field.len()),
            lines: Vec::new(),
            config,
            field,
        })
    }

    /// Build a starfield from a named preset.
    pub fn from_preset(
        preset: StarfieldPreset,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, StarfieldError> {
        Self::new(preset.config(), viewport, seed)
    }

    /// The active configuration.
    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    /// The current particle set.
    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    /// The viewport particles were generated for.
    pub fn viewport(&self) -> Viewport {
        self.field.viewport()
    }

    /// React to a display resize. Regenerates the particle set when the
    /// dimensions changed and returns whether it did.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<bool, StarfieldError> {
        let viewport = Viewport::new(width, height)?;
        let regenerated = self.field.resize(viewport, &self.config);
        if regenerated {
            self.projected.clear();
            self.lines.clear();
        }
        Ok(regenerated)
    }

    /// Project every particle at `state.time` and rebuild constellation lines.
    ///
    /// All particles in the returned slice observe the same time value.
    pub fn update(&mut self, state: &AnimationState) -> &[ProjectedState] {
        let viewport = self.field.viewport();
        self.projected.clear();
        self.projected.extend(
            self.field
                .particles()
                .iter()
                .map(|p| project(p, state.time, viewport, &self.config)),
        );
        collect_lines(&self.projected, &self.config.constellations, &mut self.lines);
        &self.projected
    }

    /// Output of the last [`update`](Self::update).
    pub fn projected(&self) -> &[ProjectedState] {
        &self.projected
    }

    /// Constellation lines from the last [`update`](Self::update).
    pub fn lines(&self) -> &[ConstellationLine] {
        &self.lines
    }

    /// Project a single particle without touching the frame buffers.
    pub fn project_particle(&self, index: usize, time: f32) -> Option<ProjectedState> {
        self.field
            .particles()
            .get(index)
            .map(|p| project(p, time, self.field.viewport(), &self.config))
    }
}
