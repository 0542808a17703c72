//! Error types for the rules crate
//!
//! Both variants are recoverable: callers at the input boundary treat them as
//! a silent no-op, they are never fatal.

use crate::rules::MoveRejection;
use crate::types::BoardPos;
use thiserror::Error;

/// Errors that can occur while querying or mutating the board
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinate outside the 8x8 grid
    #[error("Coordinate ({row}, {col}) is outside the board (must be 0-7)")]
    OutOfRange { row: i32, col: i32 },

    /// Proposed move failed validation
    #[error("Illegal move from {from} to {to}: {reason}")]
    IllegalMove {
        from: BoardPos,
        to: BoardPos,
        reason: MoveRejection,
    },
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
