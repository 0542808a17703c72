//! Visual effects module
//!
//! Selection marker, move hints and last move highlighting. Each effect
//! despawns its markers and rebuilds them when its inputs change.

pub mod last_move;
pub mod move_hints;
pub mod selection;

pub use last_move::*;
pub use move_hints::*;
pub use selection::*;

use crate::core::AppConfig;
use crate::game::{ChessGame, GameSystems, LastMove};
use crate::rendering::utils::CELL_SIZE;
use bevy::prelude::*;

/// Meshes shared by all highlight markers
#[derive(Resource)]
pub struct HighlightMeshes {
    pub selection: Handle<Mesh>,
    pub hint: Handle<Mesh>,
    pub last_move: Handle<Mesh>,
}

impl FromWorld for HighlightMeshes {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        HighlightMeshes {
            selection: meshes.add(Sphere::new(0.5 * CELL_SIZE).mesh().uv(24, 12)),
            hint: meshes.add(Plane3d::default().mesh().size(0.4 * CELL_SIZE, 0.4 * CELL_SIZE)),
            last_move: meshes.add(Plane3d::default().mesh().size(0.95 * CELL_SIZE, 0.95 * CELL_SIZE)),
        }
    }
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HighlightMeshes>().add_systems(
            Update,
            (
                update_selection_marker_system.run_if(resource_changed::<ChessGame>),
                update_move_hints_system
                    .run_if(resource_changed::<ChessGame>.or(resource_changed::<AppConfig>)),
                update_last_move_highlight_system
                    .run_if(resource_changed::<LastMove>.or(resource_changed::<AppConfig>)),
            )
                .in_set(GameSystems::Visual),
        );
    }
}
