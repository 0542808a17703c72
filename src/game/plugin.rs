//! Game plugin - rules engine state and turn flow
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] for [`crate::core::AppConfig`]
//! - Bevy input (`ButtonInput<KeyCode>`) for the orbit camera
//!
//! # System Organization
//!
//! - `Input` - orbit camera keys (pointer picking lives in [`crate::input`])
//! - `Execution` - [`apply_square_activations`]
//! - `Visual` - populated by [`crate::rendering`]

use super::events::SquareActivated;
use super::resources::{ChessGame, LastMove};
use super::system_sets::GameSystems;
use super::systems::{apply_square_activations, orbit_camera_system, OrbitCamera};
use crate::core::AppConfig;
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChessGame>()
            .init_resource::<LastMove>()
            .add_message::<SquareActivated>()
            .register_type::<OrbitCamera>();

        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                orbit_camera_system
                    .in_set(GameSystems::Input)
                    .run_if(resource_exists::<ButtonInput<KeyCode>>)
                    .run_if(resource_exists::<AppConfig>),
                apply_square_activations.in_set(GameSystems::Execution),
            ),
        );

        app.add_systems(Startup, log_new_game);
    }
}

fn log_new_game(game: Res<ChessGame>) {
    info!(
        "[GAME] New game, {} to move\n{}",
        game.active_color(),
        game.board()
    );
}
