//! Input module - maps pointer and keyboard input onto the game
//!
//! - `pointer` - cursor tracking and ray-cast square picking, producing
//!   [`crate::game::SquareActivated`]
//! - `keyboard` - Esc to quit
//!
//! Camera keys are handled by [`crate::game::systems::camera`].

pub mod keyboard;
pub mod pointer;

pub use keyboard::exit_on_escape;
pub use pointer::*;

use crate::game::GameSystems;
use bevy::prelude::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorState>()
            .register_type::<CursorState>();

        app.add_systems(
            Update,
            (
                (cursor_tracking_system, square_picking_system).chain(),
                exit_on_escape,
            )
                .in_set(GameSystems::Input),
        );
    }
}
