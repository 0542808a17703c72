//! Move hints visualization system
//!
//! Marks every destination the selected piece could move to when
//! `display.show_hints` is enabled.

use crate::core::AppConfig;
use crate::game::ChessGame;
use crate::rendering::effects::HighlightMeshes;
use crate::rendering::utils::{square_translation, BoardMaterials, OVERLAY_HEIGHT};
use bevy::prelude::*;

/// Marker component for squares showing move hints
#[derive(Component)]
pub struct MoveHint;

pub fn update_move_hints_system(
    mut commands: Commands,
    config: Res<AppConfig>,
    game: Res<ChessGame>,
    hint_query: Query<Entity, With<MoveHint>>,
    meshes: Res<HighlightMeshes>,
    materials: Res<BoardMaterials>,
) {
    for entity in hint_query.iter() {
        commands.entity(entity).despawn();
    }

    if !config.display.show_hints {
        return;
    }

    for pos in game.possible_moves_for_selection() {
        commands.spawn((
            Mesh3d(meshes.hint.clone()),
            MeshMaterial3d(materials.move_hint.clone()),
            Transform::from_translation(square_translation(pos.row(), pos.col(), OVERLAY_HEIGHT + 0.01)),
            MoveHint,
            Name::new("Move Hint"),
        ));
    }
}
