//! Messages exchanged between the input layer and the game plugin

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A board coordinate picked by the user
///
/// Coordinates are signed and unchecked; off-board values are passed through
/// and ignored by the rules engine.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareActivated {
    pub row: i32,
    pub col: i32,
}
