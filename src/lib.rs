//! 3D chess board application
//!
//! Bevy front end for the `chess_rules` engine: renders the board, maps
//! pointer clicks to board coordinates and orbits the camera. A headless
//! console driver runs the same engine without a window.

pub mod core;
pub mod game;
pub mod headless;
pub mod input;
pub mod rendering;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::core::{AppConfig, ConfigSource, CorePlugin};
use crate::game::GamePlugin;
use crate::input::InputPlugin;
use crate::rendering::RenderingPlugin;

/// Build the windowed application
pub fn build_app(config: AppConfig, source: ConfigSource) -> App {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(config.window.to_window()),
                ..default()
            })
            .set(LogPlugin {
                filter: config.log_filter.clone(),
                level: bevy::log::Level::INFO,
                ..default()
            }),
    )
    .add_plugins(CorePlugin { config, source })
    .add_plugins((GamePlugin, InputPlugin, RenderingPlugin));

    app
}
