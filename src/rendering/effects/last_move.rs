//! Last move highlighting system
//!
//! Highlights the from/to squares of the last move when
//! `display.highlight_last_move` is enabled.

use crate::core::AppConfig;
use crate::game::LastMove;
use crate::rendering::effects::HighlightMeshes;
use crate::rendering::utils::{square_translation, BoardMaterials, OVERLAY_HEIGHT};
use bevy::prelude::*;

/// Marker component for squares showing last move highlight
#[derive(Component)]
pub struct LastMoveHighlight;

pub fn update_last_move_highlight_system(
    mut commands: Commands,
    config: Res<AppConfig>,
    last_move: Res<LastMove>,
    highlight_query: Query<Entity, With<LastMoveHighlight>>,
    meshes: Res<HighlightMeshes>,
    materials: Res<BoardMaterials>,
) {
    for entity in highlight_query.iter() {
        commands.entity(entity).despawn();
    }

    if !config.display.highlight_last_move {
        return;
    }

    if let Some(outcome) = last_move.0 {
        for pos in [outcome.from, outcome.to] {
            commands.spawn((
                Mesh3d(meshes.last_move.clone()),
                MeshMaterial3d(materials.last_move.clone()),
                Transform::from_translation(square_translation(pos.row(), pos.col(), OVERLAY_HEIGHT + 0.005)),
                LastMoveHighlight,
                Name::new("Last Move Highlight"),
            ));
        }
    }
}
