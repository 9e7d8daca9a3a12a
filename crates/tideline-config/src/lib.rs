//! Configuration system for Tideline.
//!
//! Every tunable of the avatar and camera kinematics lives here and persists
//! to disk as a RON file. Supports CLI overrides via clap, hot-reload
//! detection, and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, FlyConfig, InputConfig, OrbitConfig, PlayerConfig, WaterConfig,
    WindowConfig, default_config_dir,
};
pub use error::ConfigError;
