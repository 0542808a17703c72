//! Game state aggregate and the selection/move state machine
//!
//! [`GameState`] owns the board, whose turn it is and the current selection.
//! It is driven one coordinate at a time through
//! [`GameState::on_square_activated`]:
//!
//! ```text
//! NoSelection --(own piece)--> Selected(pos)
//! NoSelection --(anything else)--> NoSelection
//! Selected(pos) --(any on-board square)--> NoSelection   (moves first if legal)
//! either state --(off-board coordinate)--> unchanged
//! ```
//!
//! Renderers read a [`GameSnapshot`] and never mutate the state.

use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::rules::{self, MoveRejection};
use crate::types::{BoardPos, Piece, PieceColor};
use tracing::{debug, info};

/// Whose turn it is and the current move number
///
/// The move number follows chess notation: it increments only after Black
/// completes a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub color: PieceColor,
    pub move_number: u32,
}

impl Default for Turn {
    fn default() -> Self {
        Self {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl Turn {
    /// Hand the move to the other side
    pub fn switch(&mut self) {
        self.color = match self.color {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.move_number += 1;
                PieceColor::White
            }
        };
    }
}

/// Transient UI selection awaiting a destination
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    #[default]
    None,
    Selected(BoardPos),
}

impl Selection {
    pub fn position(&self) -> Option<BoardPos> {
        match self {
            Selection::None => None,
            Selection::Selected(pos) => Some(*pos),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

/// A move that was applied to the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub from: BoardPos,
    pub to: BoardPos,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IgnoreReason {
    /// Coordinate outside the grid; nothing changes
    OffBoard,
    /// No selection and the square does not hold an own piece
    NotOwnPiece,
}

/// Observable result of one activation. Only `Selected`, `Moved` and
/// `Rejected` change state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activation {
    Ignored(IgnoreReason),
    Selected(BoardPos),
    Moved(MoveOutcome),
    /// Move refused; the selection was dropped and the board is unchanged
    Rejected {
        from: BoardPos,
        to: BoardPos,
        reason: MoveRejection,
    },
}

/// Read-only view handed to renderers each frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board: Board,
    pub active_color: PieceColor,
    pub move_number: u32,
    pub selection: Selection,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Turn,
    selection: Selection,
}

impl GameState {
    /// Fresh game: standard setup, White to move, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position
    pub fn from_board(board: Board, active_color: PieceColor) -> Self {
        Self {
            board,
            turn: Turn {
                color: active_color,
                move_number: 1,
            },
            selection: Selection::None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> PieceColor {
        self.turn.color
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            active_color: self.turn.color,
            move_number: self.turn.move_number,
            selection: self.selection,
        }
    }

    /// Destinations available to the selected piece, empty without a selection
    pub fn possible_moves_for_selection(&self) -> Vec<BoardPos> {
        self.selection
            .position()
            .map(|from| rules::possible_moves(&self.board, from))
            .unwrap_or_default()
    }

    /// Feed one board coordinate from the input layer
    pub fn on_square_activated(&mut self, row: i32, col: i32) -> Activation {
        let Ok(pos) = BoardPos::new(row, col) else {
            debug!("[GAME] Ignoring off-board activation ({}, {})", row, col);
            return Activation::Ignored(IgnoreReason::OffBoard);
        };

        match self.selection {
            Selection::None => {
                if self.board.at(pos).color() == Some(self.turn.color) {
                    self.selection = Selection::Selected(pos);
                    debug!("[GAME] {} selected {}", self.turn.color, pos);
                    Activation::Selected(pos)
                } else {
                    Activation::Ignored(IgnoreReason::NotOwnPiece)
                }
            }
            Selection::Selected(from) => {
                self.selection = Selection::None;
                match self.try_move(from, row, col) {
                    Ok(outcome) => Activation::Moved(outcome),
                    Err(RulesError::IllegalMove { from, to, reason }) => {
                        debug!("[GAME] Rejected {} -> {}: {}", from, to, reason);
                        Activation::Rejected { from, to, reason }
                    }
                    // Destination was validated above
                    Err(RulesError::OutOfRange { .. }) => Activation::Ignored(IgnoreReason::OffBoard),
                }
            }
        }
    }

    /// Validate and apply a move for the side to play, flipping the turn
    ///
    /// An off-board destination is `OutOfRange`; every other refusal is
    /// `IllegalMove`.
    pub fn try_move(&mut self, from: BoardPos, dst_row: i32, dst_col: i32) -> RulesResult<MoveOutcome> {
        let to = BoardPos::new(dst_row, dst_col)?;
        let illegal = |reason| RulesError::IllegalMove { from, to, reason };

        let piece = self
            .board
            .piece_at(from)
            .ok_or(illegal(MoveRejection::EmptySource))?;
        if piece.color != self.turn.color {
            return Err(illegal(MoveRejection::WrongTurn));
        }

        rules::validate_move(&self.board, from, dst_row, dst_col).map_err(illegal)?;
        let captured = self.board.piece_at(to);

        self.board.place(to, Some(piece));
        self.board.place(from, None);
        self.turn.switch();

        info!(
            "[GAME] {} {:?} {} -> {}{}",
            piece.color,
            piece.piece_type,
            from,
            to,
            captured.map_or(String::new(), |c| format!(" captures {:?}", c.piece_type))
        );

        Ok(MoveOutcome {
            from,
            to,
            piece,
            captured,
        })
    }
}
