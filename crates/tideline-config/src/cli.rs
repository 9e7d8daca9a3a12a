//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Tideline command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "tideline", about = "Tideline avatar and camera simulation")]
pub struct CliArgs {
    /// Viewport width used for pointer normalization.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height used for pointer normalization.
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in the free-fly camera.
    #[arg(long)]
    pub fly: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(fly) = args.fly {
            self.debug.fly_camera = fly;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
