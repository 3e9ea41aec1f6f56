//! Headless splash player.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p horazion-demo` to play the default splash.
//! Run with `cargo run -p horazion-demo -- --preset warp --frames 120 --dump-frames`
//! to stream frames as JSON lines.

mod platform;
mod playback;

use std::io::Write;

use clap::Parser;
use horazion_config::{CliArgs, Config};
use platform::PlatformDirs;
use tracing::error;

fn main() {
    let args = CliArgs::parse();

    let dirs = match args.config.clone() {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to resolve platform directories: {e}");
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = dirs.create_all() {
        eprintln!("Failed to create platform directories: {e}");
        std::process::exit(1);
    }

    let mut config = match Config::load_or_create(&dirs.config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config, using defaults: {e}");
            Config::default()
        }
    };
    if let Err(e) = config.apply_cli_overrides(&args) {
        eprintln!("Invalid arguments: {e}");
        std::process::exit(2);
    }

    horazion_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    let frames = args
        .frames
        .unwrap_or_else(|| playback::lifecycle_frames(&config));

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let sink: Option<&mut dyn Write> = if args.dump_frames {
        Some(&mut lock as &mut dyn Write)
    } else {
        None
    };

    match playback::play(&config, frames, sink) {
        Ok(summary) => {
            if !args.dump_frames {
                println!(
                    "Played {} frames: phase {:?}, completed {}, {} stars visible in last frame",
                    summary.frames, summary.phase, summary.completed, summary.visible_stars
                );
            }
        }
        Err(e) => {
            error!("Playback failed: {e}");
            std::process::exit(1);
        }
    }
}
