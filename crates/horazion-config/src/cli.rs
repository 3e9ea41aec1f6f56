//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use horazion_starfield::StarfieldPreset;

use crate::{Config, ConfigError};

/// Horazion splash command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "horazion", about = "Horazion starfield splash")]
pub struct CliArgs {
    /// Viewport width in logical pixels.
    #[arg(long)]
    pub width: Option<f32>,

    /// Viewport height in logical pixels.
    #[arg(long)]
    pub height: Option<f32>,

    /// Starfield preset (horazion, warp, drift, intro).
    #[arg(long)]
    pub preset: Option<String>,

    /// Particle placement seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of frames to play; defaults to the full splash lifecycle.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Headless playback frame rate.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Write every frame to stdout as a JSON line.
    #[arg(long)]
    pub dump_frames: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        if let Some(w) = args.width {
            self.viewport.width = w;
        }
        if let Some(h) = args.height {
            self.viewport.height = h;
        }
        if let Some(ref name) = args.preset {
            self.starfield.preset = name.parse::<StarfieldPreset>()?;
        }
        if let Some(seed) = args.seed {
            self.starfield.seed = seed;
        }
        if let Some(fps) = args.fps {
            self.splash.frame_rate = fps;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horazion_starfield::StarfieldError;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920.0),
            preset: Some("warp".to_string()),
            seed: Some(7),
            ..Default::default()
        };
        config.apply_cli_overrides(&args).unwrap();
        assert_eq!(config.viewport.width, 1920.0);
        assert_eq!(config.starfield.preset, StarfieldPreset::Warp);
        assert_eq!(config.starfield.seed, 7);
        // Non-overridden fields retain defaults
        assert_eq!(config.viewport.height, 844.0);
        assert_eq!(config.splash.frame_rate, 60);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default()).unwrap();
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_unknown_preset() {
        let mut config = Config::default();
        let args = CliArgs {
            preset: Some("supernova".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.apply_cli_overrides(&args),
            Err(ConfigError::Starfield(StarfieldError::UnknownPreset(_)))
        ));
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "horazion",
            "--width",
            "1024",
            "--preset",
            "drift",
            "--frames",
            "30",
            "--dump-frames",
        ]);
        assert_eq!(args.width, Some(1024.0));
        assert_eq!(args.preset.as_deref(), Some("drift"));
        assert_eq!(args.frames, Some(30));
        assert!(args.dump_frames);
        assert!(args.config.is_none());
    }
}
