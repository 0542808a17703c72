//! Application configuration
//!
//! [`AppConfig`] is read once before the app starts, from an explicit
//! `--config` file or from `settings.json` in the user's configuration
//! directory, then command-line flags are layered on top.
//!
//! # Error Handling
//!
//! - Explicit `--config` path: any read/parse failure is returned to `main`
//! - Implicit settings path: a missing file means defaults, a broken one
//!   falls back to defaults and is reported through [`ConfigSource`]

use super::cli::Cli;
use super::error::{CoreError, CoreResult};
use super::window_config::WindowConfig;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default log filter for both the windowed and headless front ends
pub const DEFAULT_LOG_FILTER: &str = "wgpu=warn,naga=error,bevy_render=warn,chess3d=info,chess_rules=info";

/// Orbit camera tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct CameraConfig {
    /// Horizontal distance from the board centre
    pub radius: f32,
    pub initial_angle_deg: f32,
    pub initial_height: f32,
    /// Degrees per A/D press
    pub rotate_step_deg: f32,
    /// Units per W/S press
    pub height_step: f32,
    /// S only lowers the camera while it is above this height
    pub min_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            initial_angle_deg: 45.0,
            initial_height: 15.0,
            rotate_step_deg: 3.0,
            height_step: 1.5,
            min_height: 3.0,
        }
    }
}

/// Optional board overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct DisplayConfig {
    /// Mark the destinations of the selected piece
    pub show_hints: bool,
    pub highlight_last_move: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_hints: true,
            highlight_last_move: true,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub display: DisplayConfig,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            display: DisplayConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Where the active configuration came from, logged once logging is up
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    /// Implicit settings file existed but could not be used
    Fallback { path: PathBuf, error: String },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::Defaults => info!("[CONFIG] No settings file found. Using defaults."),
            ConfigSource::File(path) => info!("[CONFIG] Loaded settings from {:?}", path),
            ConfigSource::Fallback { path, error } => warn!(
                "[CONFIG] Failed to load settings at {:?}: {}. Using defaults.",
                path, error
            ),
        }
    }
}

/// Resolve the implicit settings path
///
/// Returns `settings.json` in the user's configuration directory, or in the
/// working directory when no configuration directory can be determined.
pub fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chess3d", "Chess3D") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CoreError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Load from `explicit` if given, otherwise from [`default_config_path`]
    pub fn load(explicit: Option<&Path>) -> CoreResult<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::load_from(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        let path = default_config_path();
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults));
        }

        match Self::load_from(&path) {
            Ok(config) => Ok((config, ConfigSource::File(path))),
            Err(e) => Ok((
                Self::default(),
                ConfigSource::Fallback {
                    path,
                    error: e.to_string(),
                },
            )),
        }
    }

    /// Apply command-line overrides, then re-validate
    pub fn apply_cli(&mut self, cli: &Cli) -> CoreResult<()> {
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
        if let Some(filter) = &cli.log_filter {
            self.log_filter = filter.clone();
        }
        if cli.no_hints {
            self.display.show_hints = false;
        }
        self.validate()
    }

    pub fn validate(&self) -> CoreResult<()> {
        let invalid = |message: &str| {
            Err(CoreError::InvalidConfig {
                message: message.to_string(),
            })
        };

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }
        // Written so that NaN fails too
        let positive = |v: f32| v > 0.0;

        if !positive(self.camera.radius) {
            return invalid("camera.radius must be positive");
        }
        if !positive(self.camera.height_step) || !positive(self.camera.rotate_step_deg) {
            return invalid("camera step sizes must be positive");
        }
        if self.camera.min_height < 0.0 {
            return invalid("camera.min_height must not be negative");
        }
        Ok(())
    }
}
