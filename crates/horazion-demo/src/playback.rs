//! Headless splash playback at a fixed frame rate.

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

use horazion_config::{Config, ConfigError};
use horazion_splash::{
    FrameLoop, LoadingStar, LoadingStarPose, SplashFrame, SplashPhase, SplashScene,
};
use horazion_starfield::StarfieldError;
use serde::Serialize;
use tracing::info;

/// Errors that abort playback.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The starfield rejected its configuration.
    #[error(transparent)]
    Starfield(#[from] StarfieldError),
    /// A frame could not be encoded.
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
    /// A frame could not be written.
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// What the playback did.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSummary {
    /// Frames rendered.
    pub frames: u64,
    /// Final lifecycle phase.
    pub phase: SplashPhase,
    /// Whether the completion callback fired.
    pub completed: bool,
    /// Stars with non-zero effective opacity in the last frame.
    pub visible_stars: usize,
}

#[derive(Serialize)]
struct DumpedFrame<'a> {
    #[serde(flatten)]
    splash: SplashFrame<'a>,
    loading_star: LoadingStarPose,
}

/// Frames needed to play the whole lifecycle, plus the one that observes
/// the finished state.
pub fn lifecycle_frames(config: &Config) -> u32 {
    let total_ms = config.splash.hold_ms + config.splash.fade_ms;
    let fps = u64::from(config.splash.frame_rate.max(1));
    (total_ms * fps).div_ceil(1000) as u32 + 1
}

/// Play the splash for `frames` frames, optionally writing each one as a JSON
/// line to `out`.
pub fn play(
    config: &Config,
    frames: u32,
    mut out: Option<&mut dyn Write>,
) -> Result<PlaybackSummary, PlaybackError> {
    let viewport = config.viewport()?;
    let completed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&completed);
    let mut scene = SplashScene::with_callback(config.scene_config()?, viewport, move || {
        info!("Splash completion signalled");
        flag.set(true);
    })?;
    let mut loading_star = LoadingStar::default();
    let mut frame_loop = FrameLoop::new();
    let frame_time = config.splash.frame_time();

    info!(
        "Playing {} frames of preset '{}' at {}x{}",
        frames, config.starfield.preset, viewport.width, viewport.height
    );
    scene.start();

    let mut visible_stars = 0;
    for _ in 0..frames {
        let mut dt = 0.0;
        frame_loop.tick_with(frame_time, |clamped| dt = clamped);

        loading_star.advance(dt);
        let frame = scene.frame(dt);
        visible_stars = frame
            .stars
            .iter()
            .filter(|s| frame.state.effective_opacity(s) > 0.0)
            .count();

        if let Some(out) = out.as_deref_mut() {
            let dumped = DumpedFrame {
                splash: frame,
                loading_star: loading_star.pose(),
            };
            serde_json::to_writer(&mut *out, &dumped)?;
            writeln!(out)?;
        }
    }

    let summary = PlaybackSummary {
        frames: frame_loop.frame_count(),
        phase: scene.phase(),
        completed: completed.get(),
        visible_stars,
    };
    info!(
        "Playback done: {} frames, phase {:?}, completed {}",
        summary.frames, summary.phase, summary.completed
    );
    Ok(summary)
}
