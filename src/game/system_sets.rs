//! System organization using SystemSets
//!
//! # Execution Order
//!
//! Systems run in this order each frame:
//! 1. **Input** - pointer picking, camera keys
//! 2. **Execution** - feed activations to the rules engine
//! 3. **Visual** - rebuild pieces and highlights from the game state

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Pointer and keyboard handling
    Input,

    /// Selection state machine and move application
    Execution,

    /// Piece transforms, highlights, move markers
    Visual,
}
