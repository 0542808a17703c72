//! Core plugin
//!
//! Inserts the already-loaded [`AppConfig`] and reports where it came from.
//! Configuration is resolved in `main` before the window exists, so this
//! plugin only hands it to the ECS.
//!
//! # Plugin Order
//!
//! 1. [`CorePlugin`] - configuration resources
//! 2. [`bevy::DefaultPlugins`] - window, renderer, logging
//! 3. [`crate::game::GamePlugin`] - rules and turn state
//! 4. [`crate::input::InputPlugin`], [`crate::rendering::RenderingPlugin`]

use bevy::prelude::*;

use super::config::{AppConfig, CameraConfig, ConfigSource, DisplayConfig};
use super::window_config::WindowConfig;

pub struct CorePlugin {
    pub config: AppConfig,
    pub source: ConfigSource,
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            source: ConfigSource::Defaults,
        }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.source.clone());

        app.register_type::<AppConfig>()
            .register_type::<WindowConfig>()
            .register_type::<CameraConfig>()
            .register_type::<DisplayConfig>();

        app.add_systems(Startup, log_config_source);
    }
}

/// Logging is only available once `LogPlugin` has run, so the load result is
/// reported from a startup system
fn log_config_source(source: Res<ConfigSource>, config: Res<AppConfig>) {
    source.log();
    debug!(
        "[CONFIG] window {}x{}, hints {}, last-move highlight {}",
        config.window.width,
        config.window.height,
        config.display.show_hints,
        config.display.highlight_last_move
    );
}
