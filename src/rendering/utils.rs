//! Board geometry and shared materials
//!
//! Square (row, col) occupies the unit cell `[col, col + 1] x [row, row + 1]`
//! on the XZ plane. The board top is at `y = 0`, cells extend down by
//! [`BOARD_HEIGHT`] and pieces stand half a board height above the top.
//!
//! # Coloring
//!
//! Cells use a three-tone pattern `(row + col) % 3` (silver, white, dark
//! grey). A translucent two-tone checkerboard overlay is drawn just above
//! the cells so the usual light/dark squares stay readable.

use bevy::prelude::*;

pub const CELL_SIZE: f32 = 1.0;
pub const BOARD_HEIGHT: f32 = 0.2;

/// Height of the translucent checkerboard above the board top
pub const OVERLAY_HEIGHT: f32 = 0.01;

/// Base height of piece models
pub const PIECE_BASE_HEIGHT: f32 = BOARD_HEIGHT / 2.0;

/// Cell tones indexed by [`cell_tone`]
pub const CELL_TONES: [Color; 3] = [
    Color::srgb(0.75, 0.75, 0.75),
    Color::srgb(1.0, 1.0, 1.0),
    Color::srgb(0.3, 0.3, 0.3),
];

pub fn cell_tone(row: u8, col: u8) -> usize {
    (row as usize + col as usize) % 3
}

/// Light squares of the overlay checkerboard, a1 is dark
pub fn is_light_square(row: u8, col: u8) -> bool {
    (row + col) % 2 == 1
}

/// World-space centre of a square at the given height
pub fn square_translation(row: u8, col: u8, y: f32) -> Vec3 {
    Vec3::new(
        (col as f32 + 0.5) * CELL_SIZE,
        y,
        (row as f32 + 0.5) * CELL_SIZE,
    )
}

fn translucent(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

/// Material handles shared by the board, pieces and highlights
#[derive(Resource)]
pub struct BoardMaterials {
    pub cells: [Handle<StandardMaterial>; 3],
    pub overlay_light: Handle<StandardMaterial>,
    pub overlay_dark: Handle<StandardMaterial>,
    pub white_piece: Handle<StandardMaterial>,
    pub black_piece: Handle<StandardMaterial>,
    pub selection: Handle<StandardMaterial>,
    pub move_hint: Handle<StandardMaterial>,
    pub last_move: Handle<StandardMaterial>,
}

impl FromWorld for BoardMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let [silver, white, grey] = CELL_TONES;
        BoardMaterials {
            cells: [
                materials.add(silver),
                materials.add(white),
                materials.add(grey),
            ],
            overlay_light: materials.add(translucent(Color::srgba(0.75, 0.75, 0.75, 0.7))),
            overlay_dark: materials.add(translucent(Color::srgba(0.2, 0.2, 0.2, 0.7))),
            white_piece: materials.add(StandardMaterial {
                base_color: Color::srgb(0.9, 0.9, 0.9),
                perceptual_roughness: 0.4,
                ..default()
            }),
            black_piece: materials.add(StandardMaterial {
                base_color: Color::srgb(0.1, 0.1, 0.1),
                perceptual_roughness: 0.4,
                ..default()
            }),
            selection: materials.add(translucent(Color::srgba(1.0, 1.0, 0.0, 0.35))),
            move_hint: materials.add(translucent(Color::srgba(0.2, 0.8, 0.3, 0.6))),
            last_move: materials.add(translucent(Color::srgba(0.95, 0.7, 0.2, 0.5))),
        }
    }
}
