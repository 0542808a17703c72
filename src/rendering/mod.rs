//! Rendering module - 3D board visualization
//!
//! Draws whatever [`crate::game::ChessGame`] currently holds. Nothing in
//! here mutates game state.
//!
//! # Architecture
//!
//! - `board` - 64 cuboid cells plus the translucent overlay
//! - `pieces` - primitive-mesh piece models, rebuilt on state change
//! - `effects` - selection marker, move hints, last move highlight
//! - `scene` - orbit camera, point light, clear colour
//! - `utils` - board geometry and shared materials
//!
//! Uses `Mesh3d` / `MeshMaterial3d<StandardMaterial>` throughout; meshes and
//! materials are created once and shared by handle.

pub mod board;
pub mod effects;
pub mod pieces;
pub mod scene;
pub mod utils;

pub use board::*;
pub use effects::*;
pub use pieces::*;
pub use scene::*;
pub use utils::*;

use bevy::prelude::*;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(CLEAR_COLOR))
            .init_resource::<BoardMaterials>()
            .add_plugins((PiecePlugin, EffectsPlugin))
            .add_systems(Startup, (setup_scene, board::create_board));
    }
}
