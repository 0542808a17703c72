//! Board creation
//!
//! Spawns the 64 cuboid cells and the translucent overlay once at startup.
//! Uses the batch spawning pattern: collect every bundle, then spawn.

use crate::rendering::utils::{
    cell_tone, is_light_square, square_translation, BoardMaterials, BOARD_HEIGHT, CELL_SIZE,
    OVERLAY_HEIGHT,
};
use bevy::prelude::*;
use chess_rules::BoardPos;

/// One board cell
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCell(pub BoardPos);

/// Translucent overlay quad above a cell
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOverlay(pub BoardPos);

pub(crate) fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<BoardMaterials>,
) {
    let cell_mesh = meshes.add(Cuboid::new(CELL_SIZE, BOARD_HEIGHT, CELL_SIZE));
    let overlay_mesh = meshes.add(Plane3d::default().mesh().size(CELL_SIZE, CELL_SIZE));

    let cells: Vec<_> = BoardPos::all()
        .map(|pos| {
            (
                Mesh3d(cell_mesh.clone()),
                MeshMaterial3d(materials.cells[cell_tone(pos.row(), pos.col())].clone()),
                Transform::from_translation(square_translation(pos.row(), pos.col(), -BOARD_HEIGHT / 2.0)),
                BoardCell(pos),
                Name::new(format!("Square {}", pos)),
            )
        })
        .collect();

    let overlays: Vec<_> = BoardPos::all()
        .map(|pos| {
            let material = if is_light_square(pos.row(), pos.col()) {
                materials.overlay_light.clone()
            } else {
                materials.overlay_dark.clone()
            };
            (
                Mesh3d(overlay_mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(square_translation(pos.row(), pos.col(), OVERLAY_HEIGHT)),
                BoardOverlay(pos),
            )
        })
        .collect();

    commands.spawn_batch(cells);
    commands.spawn_batch(overlays);
    info!("[RENDER] Board created");
}
