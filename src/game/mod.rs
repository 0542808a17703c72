//! Chess game module - ECS side of the rules engine
//!
//! The rules themselves live in the `chess_rules` crate. This module wraps
//! its [`chess_rules::GameState`] in a resource and drives it from
//! [`SquareActivated`] messages.
//!
//! # Module Organization
//!
//! - `events` - [`SquareActivated`]
//! - `resources` - [`ChessGame`], [`LastMove`]
//! - `systems` - activation handling and the orbit camera
//! - `system_sets` - Input → Execution → Visual ordering
//! - `plugin` - [`GamePlugin`]

pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;

pub use events::SquareActivated;
pub use plugin::GamePlugin;
pub use resources::{ChessGame, LastMove};
pub use system_sets::GameSystems;
pub use systems::{OrbitCamera, BOARD_CENTER};
