//! Game systems
//!
//! - [`input`] - feeds [`crate::game::SquareActivated`] into the rules engine
//! - [`camera`] - keyboard orbit camera

pub mod camera;
pub mod input;

pub use camera::{orbit_camera_system, orbit_position, OrbitCamera, BOARD_CENTER};
pub use input::apply_square_activations;
