//! Pointer input: cursor tracking and square picking
//!
//! A primary-button press is turned into a board coordinate by casting a ray
//! from the camera through the cursor onto the board plane `y = 0`. The hit
//! point is floored to a cell, so points left of or in front of the board
//! give negative coordinates. Those are forwarded unchanged; the rules engine
//! ignores anything off the grid.

use crate::game::{OrbitCamera, SquareActivated};
use crate::rendering::CELL_SIZE;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Current cursor position within the primary window
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct CursorState {
    /// Window coordinates, None if the cursor is outside the window
    pub position: Option<Vec2>,
    /// Time accumulator for debug logging rate-limiting
    pub last_update: f32,
}

/// Board cell under a world-space point on the board plane
pub fn world_to_square(point: Vec3, cell_size: f32) -> (i32, i32) {
    let row = (point.z / cell_size).floor() as i32;
    let col = (point.x / cell_size).floor() as i32;
    (row, col)
}

/// Where a viewport ray meets the board plane
pub fn board_plane_hit(ray: Ray3d) -> Option<Vec3> {
    let distance = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Y))?;
    Some(ray.get_point(distance))
}

pub fn cursor_tracking_system(
    q_windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
    mut cursor_state: ResMut<CursorState>,
) {
    cursor_state.last_update += time.delta_secs();
    if let Ok(window) = q_windows.single() {
        cursor_state.position = window.cursor_position();
        if cursor_state.last_update >= 1.0 {
            if let Some(position) = cursor_state.position {
                trace!(
                    "[INPUT] Cursor position: ({:.1}, {:.1})",
                    position.x,
                    position.y
                );
            }
            cursor_state.last_update = 0.0;
        }
    } else {
        cursor_state.position = None;
    }
}

pub fn square_picking_system(
    mouse: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorState>,
    cameras: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    mut activations: MessageWriter<SquareActivated>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(cursor_position) = cursor.position else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        warn!("[INPUT] No orbit camera to pick through");
        return;
    };

    let ray = match camera.viewport_to_world(camera_transform, cursor_position) {
        Ok(ray) => ray,
        Err(e) => {
            debug!("[INPUT] Could not unproject cursor: {:?}", e);
            return;
        }
    };

    let Some(hit) = board_plane_hit(ray) else {
        debug!("[INPUT] Click does not reach the board plane");
        return;
    };

    let (row, col) = world_to_square(hit, CELL_SIZE);
    debug!(
        "[INPUT] Click at world ({:.2}, {:.2}) -> ({}, {})",
        hit.x, hit.z, row, col
    );
    activations.write(SquareActivated { row, col });
}
