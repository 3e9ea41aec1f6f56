//! Platform directory resolution for config and log files.

use std::path::{Path, PathBuf};

/// Errors that can occur during platform operations.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// An I/O error occurred (e.g., directory creation failed).
    #[error("platform I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// OS-specific directory paths for the demo.
///
/// Each field resolves to the platform-appropriate location following OS
/// conventions (XDG on Linux, Known Folders on Windows, Library on macOS).
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformDirs {
    /// User configuration: `config.ron`.
    pub config_dir: PathBuf,
    /// Log files.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "horazion";

impl PlatformDirs {
    /// Resolve platform-specific directories without creating them on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, PlatformError> {
        let config_base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        Ok(Self::resolve_with_root(&config_base))
    }

    /// Resolve directories rooted under a custom base path.
    pub fn resolve_with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            config_dir: app_dir.join("config"),
            log_dir: app_dir.join("logs"),
        }
    }

    /// Use an explicit config directory; logs go next to it.
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        let log_dir = config_dir.join("logs");
        Self {
            config_dir,
            log_dir,
        }
    }

    /// Create all directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Io`] if any directory cannot be created.
    pub fn create_all(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}
