//! Chess rules module - pure game logic without rendering coupling
//!
//! Board model, per-piece movement rules and the turn/selection state
//! machine behind the 3D board. Nothing in this crate knows about windows,
//! cameras or Bevy; the presentation layer feeds it board coordinates and
//! reads back a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`types`] - piece, color, square and coordinate types
//! - [`board`] - the 8x8 grid and the standard starting position
//! - [`rules`] - move validation and path clearance
//! - [`game`] - [`GameState`] aggregate and the selection state machine
//! - [`error`] - [`RulesError`]
//!
//! # Scope
//!
//! Moves are validated by shape, obstruction and color only. There is no
//! check or mate detection, castling, promotion, draw rule or move history.
//!
//! # Example
//!
//! ```
//! use chess_rules::{Activation, GameState, PieceColor};
//!
//! let mut game = GameState::new();
//! assert!(matches!(game.on_square_activated(1, 4), Activation::Selected(_)));
//! assert!(matches!(game.on_square_activated(3, 4), Activation::Moved(_)));
//! assert_eq!(game.active_color(), PieceColor::Black);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use error::{RulesError, RulesResult};
pub use game::{Activation, GameSnapshot, GameState, IgnoreReason, MoveOutcome, Selection, Turn};
pub use rules::{is_path_clear, is_valid_move, possible_moves, validate_move, MoveRejection};
pub use types::{BoardPos, Piece, PieceColor, PieceType, Square, BOARD_SIZE};
