//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TRG_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use tilerig_physics::PlayerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulation timing configuration
    #[serde(default)]
    pub timing: TimingConfig,
    /// Player movement tuning
    #[serde(default)]
    pub player: PlayerTuning,
    /// Level configuration
    #[serde(default)]
    pub level: LevelConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TRG_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TRG_TIMING__BASE_HZ=30 -> timing.base_hz = 30
        figment = figment.merge(Env::prefixed("TRG_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Simulation timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Base simulation rate in Hz
    ///
    /// The frame delta is clamped to [1/base_hz, 2/base_hz] seconds and
    /// the tick-length table derives from this rate.
    pub base_hz: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { base_hz: 60.0 }
    }
}

/// Player movement tuning
///
/// Covers the forces and the climb teleport; sensor geometry stays at
/// the controller's built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTuning {
    /// Horizontal force per unit of movement intent
    pub move_force: f32,
    /// Peak scale of the jump force profile
    pub jump_force: f32,
    /// Downward force while rising
    pub gravity_rise: f32,
    /// Downward force while falling
    pub gravity_fall: f32,
    /// Upward teleport distance at the end of a ledge climb
    pub climb_offset: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        let base = PlayerConfig::default();
        Self {
            move_force: base.move_force,
            jump_force: base.jump_force,
            gravity_rise: base.gravity_rise,
            gravity_fall: base.gravity_fall,
            climb_offset: base.climb_offset,
        }
    }
}

impl PlayerTuning {
    /// Build the controller config, keeping default sensor geometry
    pub fn to_player_config(&self) -> PlayerConfig {
        PlayerConfig {
            move_force: self.move_force,
            jump_force: self.jump_force,
            gravity_rise: self.gravity_rise,
            gravity_fall: self.gravity_fall,
            climb_offset: self.climb_offset,
            ..PlayerConfig::default()
        }
    }
}

/// Level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,
    /// World units per cell
    pub cell_size: f32,
    /// Player spawn position [x, y] in world units
    pub spawn: [f32; 2],
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 12,
            cell_size: 16.0,
            spawn: [48.0, 48.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
