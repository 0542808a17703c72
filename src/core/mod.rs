//! Core module - configuration, command line and application errors
//!
//! # Contents
//!
//! - [`AppConfig`] - window, camera and display settings plus the log filter
//! - [`Cli`] - command-line flags layered over the settings file
//! - [`CorePlugin`] - inserts the configuration as ECS resources
//! - [`CoreError`] - configuration loading and validation failures

pub mod cli;
pub mod config;
pub mod error;
pub mod plugin;
pub mod window_config;

pub use cli::Cli;
pub use config::{default_config_path, AppConfig, CameraConfig, ConfigSource, DisplayConfig};
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use window_config::WindowConfig;
