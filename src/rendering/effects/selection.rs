//! Selection marker
//!
//! A translucent yellow sphere around the selected piece.

use crate::game::ChessGame;
use crate::rendering::effects::HighlightMeshes;
use crate::rendering::utils::{square_translation, BoardMaterials, PIECE_BASE_HEIGHT};
use bevy::prelude::*;

#[derive(Component)]
pub struct SelectionMarker;

pub fn update_selection_marker_system(
    mut commands: Commands,
    game: Res<ChessGame>,
    marker_query: Query<Entity, With<SelectionMarker>>,
    meshes: Res<HighlightMeshes>,
    materials: Res<BoardMaterials>,
) {
    for entity in marker_query.iter() {
        commands.entity(entity).despawn();
    }

    if let Some(pos) = game.selection().position() {
        commands.spawn((
            Mesh3d(meshes.selection.clone()),
            MeshMaterial3d(materials.selection.clone()),
            Transform::from_translation(square_translation(pos.row(), pos.col(), PIECE_BASE_HEIGHT + 0.4)),
            SelectionMarker,
            Name::new(format!("Selection {}", pos)),
        ));
    }
}
