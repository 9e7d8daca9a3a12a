//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::f32::consts::PI;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the config directory.
const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings. The size doubles as the pointer normalization extents.
    pub window: WindowConfig,
    /// Input settings.
    pub input: InputConfig,
    /// Third-person orbit camera tuning.
    pub orbit: OrbitConfig,
    /// Free-fly camera tuning.
    pub fly: FlyConfig,
    /// Avatar locomotion tuning.
    pub player: PlayerConfig,
    /// Water surface tracker tuning.
    pub water: WaterConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Input configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Keybinding overrides (control name -> key names). A listed control
    /// replaces all of its default keys.
    pub keybindings: HashMap<String, Vec<String>>,
}

/// Orbit (third-person) camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Orbit radius at construction.
    pub initial_distance: f32,
    /// Orbit radius the camera eases toward.
    pub rest_distance: f32,
    /// Per-tick blend factor for the radius ease.
    pub distance_ease: f32,
    /// Once within this gap of `rest_distance`, the radius snaps.
    pub distance_snap: f32,
    /// Per-tick blend factor for `phi`/`theta` smoothing.
    pub smooth_factor: f32,
    /// Lower polar-angle bound in radians.
    pub phi_min: f32,
    /// Upper polar-angle bound in radians.
    pub phi_max: f32,
    /// Initial polar angle (from +Y) in radians.
    pub initial_phi: f32,
    /// Initial azimuth in radians.
    pub initial_theta: f32,
    /// Height of the look-at point above the avatar origin.
    pub above_offset: f32,
    /// Minimum clearance between the camera and the ground.
    pub ground_offset: f32,
    /// Lowest elevation the camera clamp considers (water level).
    pub ground_floor: f32,
}

/// Free-fly camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlyConfig {
    /// Position used until the camera is first seeded.
    pub start_position: [f32; 3],
    /// Initial pitch in radians (positive looks down).
    pub start_pitch: f32,
    /// Initial yaw in radians.
    pub start_yaw: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]`.
    pub pitch_limit: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Movement speed while boost is held.
    pub boost_speed: f32,
}

/// Avatar locomotion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walking speed in units per second.
    pub walk_speed: f32,
    /// Running speed in units per second.
    pub run_speed: f32,
    /// Per-tick blend factor toward the target speed.
    pub speed_ease: f32,
    /// Once within this gap of the target speed, the speed snaps.
    pub speed_snap: f32,
    /// Vertical position used when the ground is lower or missing.
    pub water_floor: f32,
}

/// Water surface tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaterConfig {
    /// Side length of the water plane.
    pub water_size: f32,
    /// Side length of one wave tile.
    pub wave_size: f32,
    /// Avatar displacement is divided by this to get the ripple UV offset.
    pub ripple_divisor: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Start in the free-fly camera instead of third-person.
    pub fly_camera: bool,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Tideline".to_string(),
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            initial_distance: 10.0,
            rest_distance: 4.0,
            distance_ease: 0.05,
            distance_snap: 0.01,
            smooth_factor: 0.2,
            phi_min: 0.1,
            phi_max: PI - 0.1,
            initial_phi: PI * 0.4,
            initial_theta: 0.0,
            above_offset: 2.0,
            ground_offset: 1.25,
            ground_floor: 0.0,
        }
    }
}

impl Default for FlyConfig {
    fn default() -> Self {
        Self {
            start_position: [40.0, 10.0, 40.0],
            start_pitch: -PI * 0.15,
            start_yaw: PI * 0.25,
            pitch_limit: PI * 0.5,
            speed: 10.0,
            boost_speed: 20.0,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 4.0,
            speed_ease: 0.05,
            speed_snap: 0.01,
            water_floor: -0.5,
        }
    }
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            water_size: 2048.0,
            wave_size: 256.0,
            ripple_divisor: 32.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            fly_camera: false,
        }
    }
}

/// Per-user config directory (`<config_dir>/tideline`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("tideline"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
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

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized)
            .map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
