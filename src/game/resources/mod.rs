//! Game resources
//!
//! - [`ChessGame`] - the rules engine's [`GameState`], single writer is the
//!   activation system
//! - [`LastMove`] - most recent applied move, read by the highlight effect
//!
//! Renderers only read these through `Res<_>` and rebuild on change.

use bevy::prelude::*;
use chess_rules::{GameSnapshot, GameState, MoveOutcome};

/// Board, turn and selection owned by the ECS world
#[derive(Resource, Debug, Default, Clone, Deref, DerefMut)]
pub struct ChessGame(pub GameState);

impl ChessGame {
    pub fn view(&self) -> GameSnapshot {
        self.0.snapshot()
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LastMove(pub Option<MoveOutcome>);
