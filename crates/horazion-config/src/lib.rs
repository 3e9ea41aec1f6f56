//! Configuration system for the Horazion splash engine.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization. Resolves the starfield preset plus any overrides
//! into a validated engine configuration.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SplashConfig, StarfieldSettings, ViewportConfig};
pub use error::ConfigError;
