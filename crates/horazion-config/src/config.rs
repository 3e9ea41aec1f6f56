//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;
use std::time::Duration;

use horazion_splash::{DEFAULT_TIME_RATE, Easing, SceneConfig, SplashTiming};
use horazion_starfield::{StarfieldConfig, StarfieldPreset, Viewport};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Display area settings.
    pub viewport: ViewportConfig,
    /// Starfield preset and overrides.
    pub starfield: StarfieldSettings,
    /// Splash lifecycle settings.
    pub splash: SplashConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Display area configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
}

/// Starfield selection. Any `Some` override replaces the preset's value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldSettings {
    /// Base look.
    pub preset: StarfieldPreset,
    /// Particle placement seed.
    pub seed: u64,
    /// Override particle count.
    pub particle_count: Option<u32>,
    /// Override far plane depth.
    pub z_max: Option<f32>,
    /// Override depth travel speed.
    pub speed: Option<f32>,
    /// Override focal length.
    pub focal_length: Option<f32>,
    /// Override sprite scale multiplier.
    pub scale_factor: Option<f32>,
    /// Force constellation lines on or off.
    pub constellations: Option<bool>,
}

/// Splash lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SplashConfig {
    /// Milliseconds at full opacity before the fade starts.
    pub hold_ms: u64,
    /// Fade duration in milliseconds.
    pub fade_ms: u64,
    /// Fade curve.
    pub fade_easing: Easing,
    /// Animation time units per second.
    pub time_rate: f64,
    /// Frame rate used for headless playback.
    pub frame_rate: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
        }
    }
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            preset: StarfieldPreset::Horazion,
            seed: 0,
            particle_count: None,
            z_max: None,
            speed: None,
            focal_length: None,
            scale_factor: None,
            constellations: None,
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            hold_ms: 4500,
            fade_ms: 1500,
            fade_easing: Easing::EaseOut,
            time_rate: DEFAULT_TIME_RATE,
            frame_rate: 60,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Resolution into engine types ---

impl StarfieldSettings {
    /// Apply overrides on top of the preset and validate the result.
    pub fn resolve(&self) -> Result<StarfieldConfig, ConfigError> {
        let mut config = self.preset.config();
        if let Some(count) = self.particle_count {
            config.particle_count = count;
        }
        if let Some(z_max) = self.z_max {
            config.z_max = z_max;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(focal_length) = self.focal_length {
            config.focal_length = focal_length;
        }
        if let Some(scale_factor) = self.scale_factor {
            config.scale_factor = scale_factor;
        }
        if let Some(enabled) = self.constellations {
            config.constellations.enabled = enabled;
        }
        config.validate()?;
        Ok(config)
    }
}

impl SplashConfig {
    /// Lifecycle durations.
    pub fn timing(&self) -> SplashTiming {
        SplashTiming {
            hold: Duration::from_millis(self.hold_ms),
            fade: Duration::from_millis(self.fade_ms),
            fade_easing: self.fade_easing,
        }
    }

    /// Seconds per headless frame.
    pub fn frame_time(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }
}

impl Config {
    /// The configured viewport.
    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        Ok(Viewport::new(self.viewport.width, self.viewport.height)?)
    }

    /// The validated starfield configuration.
    pub fn starfield_config(&self) -> Result<StarfieldConfig, ConfigError> {
        self.starfield.resolve()
    }

    /// Everything needed to build a splash scene.
    pub fn scene_config(&self) -> Result<SceneConfig, ConfigError> {
        Ok(SceneConfig {
            starfield: self.starfield_config()?,
            seed: self.starfield.seed,
            timing: self.splash.timing(),
            time_rate: self.splash.time_rate,
        })
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
