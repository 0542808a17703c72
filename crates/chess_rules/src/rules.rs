//! Chess piece movement rules
//!
//! Pure functions over a [`Board`]: no side effects, no check awareness.
//! [`validate_move`] runs the shared preconditions and then dispatches to one
//! predicate per [`PieceType`].

use crate::board::Board;
use crate::types::{BoardPos, Piece, PieceColor, PieceType};
use std::fmt;
use tracing::trace;

/// Why a proposed move was refused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveRejection {
    /// Source or destination outside the grid
    OffBoard,
    SameSquare,
    EmptySource,
    /// Destination holds a piece of the mover's color
    SelfCapture,
    /// Shape or obstruction rule of the moving piece failed
    PieceRule(PieceType),
    /// Piece belongs to the side not on move (game level only)
    WrongTurn,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OffBoard => f.write_str("destination is off the board"),
            MoveRejection::SameSquare => f.write_str("source and destination are the same square"),
            MoveRejection::EmptySource => f.write_str("no piece on the source square"),
            MoveRejection::SelfCapture => f.write_str("cannot capture own piece"),
            MoveRejection::PieceRule(piece_type) => write!(f, "{:?} cannot move that way", piece_type),
            MoveRejection::WrongTurn => f.write_str("piece does not belong to the side to move"),
        }
    }
}

/// Row a pawn may step diagonally onto even when it is empty.
///
/// This is an unfinished en-passant rule: there is no check that an enemy
/// pawn just double-stepped beside the mover.
pub fn pawn_diagonal_row(color: PieceColor) -> i32 {
    match color {
        PieceColor::White => 5,
        PieceColor::Black => 2,
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Only meaningful for straight or diagonal lines; adjacent squares are
/// vacuously clear.
pub fn is_path_clear(board: &Board, from: BoardPos, to: BoardPos) -> bool {
    let (sr, sc) = (from.row_i32(), from.col_i32());
    let (dr, dc) = (to.row_i32(), to.col_i32());
    let step_row = (dr - sr).signum();
    let step_col = (dc - sc).signum();
    let steps = (dr - sr).abs().max((dc - sc).abs());

    for i in 1..steps {
        let Ok(pos) = BoardPos::new(sr + step_row * i, sc + step_col * i) else {
            return false;
        };
        if !board.is_empty(pos) {
            trace!("[RULES] Path {} -> {} blocked at {}", from, to, pos);
            return false;
        }
    }
    true
}

/// Check a move given as raw coordinates
pub fn is_valid_move(board: &Board, src_row: i32, src_col: i32, dst_row: i32, dst_col: i32) -> bool {
    match BoardPos::new(src_row, src_col) {
        Ok(from) => validate_move(board, from, dst_row, dst_col).is_ok(),
        Err(_) => false,
    }
}

/// Validate a move, returning the destination on success or the reason it
/// was refused
pub fn validate_move(
    board: &Board,
    from: BoardPos,
    dst_row: i32,
    dst_col: i32,
) -> Result<BoardPos, MoveRejection> {
    let to = BoardPos::new(dst_row, dst_col).map_err(|_| MoveRejection::OffBoard)?;

    if from == to {
        return Err(MoveRejection::SameSquare);
    }

    let piece = board.piece_at(from).ok_or(MoveRejection::EmptySource)?;
    let target = board.piece_at(to);

    if target.is_some_and(|t| t.color == piece.color) {
        return Err(MoveRejection::SelfCapture);
    }

    let allowed = match piece.piece_type {
        PieceType::Pawn => is_valid_pawn_move(board, piece, from, to, target),
        PieceType::Rook => is_valid_rook_move(board, from, to),
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Bishop => is_valid_bishop_move(board, from, to),
        PieceType::Queen => is_valid_queen_move(board, from, to),
        PieceType::King => is_valid_king_move(from, to),
    };

    if allowed {
        Ok(to)
    } else {
        Err(MoveRejection::PieceRule(piece.piece_type))
    }
}

/// Every destination the piece on `from` may move to
pub fn possible_moves(board: &Board, from: BoardPos) -> Vec<BoardPos> {
    BoardPos::all()
        .filter(|to| validate_move(board, from, to.row_i32(), to.col_i32()).is_ok())
        .collect()
}

fn deltas(from: BoardPos, to: BoardPos) -> (i32, i32) {
    (
        (to.row_i32() - from.row_i32()).abs(),
        (to.col_i32() - from.col_i32()).abs(),
    )
}

fn is_valid_pawn_move(
    board: &Board,
    pawn: Piece,
    from: BoardPos,
    to: BoardPos,
    target: Option<Piece>,
) -> bool {
    let dir = pawn.color.pawn_direction();
    let (sr, dr) = (from.row_i32(), to.row_i32());
    let (dy, dx) = deltas(from, to);

    if from.col() == to.col() {
        // Straight advances never capture
        if target.is_some() {
            return false;
        }
        if dr == sr + dir {
            return true;
        }
        return sr == pawn.color.pawn_start_row()
            && dr == sr + 2 * dir
            && is_path_clear(board, from, to);
    }

    if dx == 1 && dy == 1 {
        return dr == sr + dir && (target.is_some() || dr == pawn_diagonal_row(pawn.color));
    }

    false
}

fn is_valid_rook_move(board: &Board, from: BoardPos, to: BoardPos) -> bool {
    // Exactly one axis changes
    if (from.row() != to.row()) == (from.col() != to.col()) {
        return false;
    }
    is_path_clear(board, from, to)
}

fn is_valid_knight_move(from: BoardPos, to: BoardPos) -> bool {
    let (dy, dx) = deltas(from, to);
    (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
}

fn is_valid_bishop_move(board: &Board, from: BoardPos, to: BoardPos) -> bool {
    let (dy, dx) = deltas(from, to);
    if dx != dy {
        return false;
    }
    is_path_clear(board, from, to)
}

fn is_valid_queen_move(board: &Board, from: BoardPos, to: BoardPos) -> bool {
    let (dy, dx) = deltas(from, to);
    if dx != dy && from.row() != to.row() && from.col() != to.col() {
        return false;
    }
    is_path_clear(board, from, to)
}

fn is_valid_king_move(from: BoardPos, to: BoardPos) -> bool {
    let (dy, dx) = deltas(from, to);
    dx <= 1 && dy <= 1
}
