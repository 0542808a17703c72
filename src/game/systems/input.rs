//! Activation handling
//!
//! Drains [`SquareActivated`] messages into the rules engine in arrival
//! order. This is the only system that mutates [`ChessGame`].

use crate::game::events::SquareActivated;
use crate::game::resources::{ChessGame, LastMove};
use bevy::prelude::*;
use chess_rules::{Activation, IgnoreReason};

pub fn apply_square_activations(
    mut activations: MessageReader<SquareActivated>,
    mut game: ResMut<ChessGame>,
    mut last_move: ResMut<LastMove>,
) {
    for &SquareActivated { row, col } in activations.read() {
        // Ignored activations leave the state untouched, so skip change detection for them
        let outcome = game.bypass_change_detection().on_square_activated(row, col);

        match outcome {
            Activation::Ignored(IgnoreReason::OffBoard) => {
                debug!("[INPUT] Click outside the board ({}, {})", row, col);
            }
            Activation::Ignored(IgnoreReason::NotOwnPiece) => {
                debug!("[INPUT] ({}, {}) holds no piece of the side to move", row, col);
            }
            Activation::Selected(pos) => {
                game.set_changed();
                info!("[INPUT] Selected {} for {}", pos, game.active_color());
            }
            Activation::Moved(outcome) => {
                game.set_changed();
                last_move.0 = Some(outcome);
                info!(
                    "[INPUT] Moved {} -> {}, {} to play (move {})",
                    outcome.from,
                    outcome.to,
                    game.active_color(),
                    game.turn().move_number
                );
            }
            Activation::Rejected { from, to, reason } => {
                game.set_changed();
                info!("[INPUT] Move {} -> {} rejected: {}", from, to, reason);
            }
        }
    }
}
