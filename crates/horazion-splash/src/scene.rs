//! A complete splash screen: starfield, horizon glow and lifecycle, advanced
//! together and pulled as one frame.

use horazion_starfield::{
    AnimationState, ConstellationLine, ProjectedState, Starfield, StarfieldConfig, StarfieldError,
    Viewport,
};
use serde::Serialize;
use tracing::debug;

use crate::clock::{AnimationClock, DEFAULT_TIME_RATE};
use crate::horizon::{HorizonFrame, HorizonGlow};
use crate::sequence::{SplashPhase, SplashSequence, SplashTiming};

/// Everything needed to build a [`SplashScene`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Starfield constants.
    pub starfield: StarfieldConfig,
    /// Particle placement seed.
    pub seed: u64,
    /// Lifecycle durations.
    pub timing: SplashTiming,
    /// Animation time units per wall-clock second.
    pub time_rate: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            starfield: StarfieldConfig::default(),
            seed: 0,
            timing: SplashTiming::default(),
            time_rate: DEFAULT_TIME_RATE,
        }
    }
}

/// One frame of the splash, borrowed from the scene's buffers.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SplashFrame<'a> {
    /// Frame counter since the scene was created.
    pub index: u64,
    /// Time and global opacity shared by everything in the frame.
    pub state: AnimationState,
    /// Lifecycle phase after this frame's advance.
    pub phase: SplashPhase,
    /// Horizon line rectangles.
    pub horizon: HorizonFrame,
    /// One projected state per particle.
    pub stars: &'a [ProjectedState],
    /// Constellation segments.
    pub lines: &'a [ConstellationLine],
}

/// Splash screen state owned by one host screen.
pub struct SplashScene {
    clock: AnimationClock,
    sequence: SplashSequence,
    horizon: HorizonGlow,
    starfield: Starfield,
    frame_index: u64,
}

impl SplashScene {
    /// Build an idle scene with no completion callback.
    pub fn new(config: SceneConfig, viewport: Viewport) -> Result<Self, StarfieldError> {
        let sequence = SplashSequence::new(config.timing.clone());
        Self::build(config, viewport, sequence)
    }

    /// Build an idle scene that calls `on_finished` once the fade completes.
    pub fn with_callback(
        config: SceneConfig,
        viewport: Viewport,
        on_finished: impl FnOnce() + 'static,
    ) -> Result<Self, StarfieldError> {
        let sequence = SplashSequence::with_callback(config.timing.clone(), on_finished);
        Self::build(config, viewport, sequence)
    }

    fn build(
        config: SceneConfig,
        viewport: Viewport,
        sequence: SplashSequence,
    ) -> Result<Self, StarfieldError> {
        let starfield = Starfield::new(config.starfield, viewport, config.seed)?;
        Ok(Self {
            clock: AnimationClock::new(config.time_rate),
            sequence,
            horizon: HorizonGlow::new(viewport),
            starfield,
            frame_index: 0,
        })
    }

    /// Start the lifecycle.
    pub fn start(&mut self) {
        self.sequence.start();
    }

    /// Tear down early. The completion callback will never fire.
    pub fn cancel(&mut self) {
        self.sequence.cancel();
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SplashPhase {
        self.sequence.phase()
    }

    /// The starfield engine.
    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    /// The animation clock.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Follow a display resize. Returns whether particles were regenerated.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<bool, StarfieldError> {
        let regenerated = self.starfield.resize(width, height)?;
        self.horizon.resize(self.starfield.viewport());
        if regenerated {
            debug!("Splash scene resized to {width}x{height}");
        }
        Ok(regenerated)
    }

    /// Advance by `dt` seconds and pull the resulting frame.
    ///
    /// Time only moves while the lifecycle is running; an idle or finished
    /// scene keeps projecting its last time value.
    pub fn frame(&mut self, dt: f64) -> SplashFrame<'_> {
        if matches!(
            self.sequence.phase(),
            SplashPhase::Animating | SplashPhase::Fading
        ) {
            self.clock.advance(dt);
            self.horizon.advance(dt);
            self.sequence.advance(dt);
        }

        let state = self.clock.state(self.sequence.global_opacity());
        self.starfield.update(&state);
        let index = self.frame_index;
        self.frame_index += 1;

        SplashFrame {
            index,
            state,
            phase: self.sequence.phase(),
            horizon: self.horizon.frame(),
            stars: self.starfield.projected(),
            lines: self.starfield.lines(),
        }
    }
}
