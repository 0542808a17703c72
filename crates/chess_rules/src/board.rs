//! Board representation
//!
//! A fixed 8x8 array of [`Square`]s indexed `[row][col]`. No legality is
//! enforced here, that is the job of [`crate::rules`].

use crate::error::RulesResult;
use crate::types::{BoardPos, Piece, PieceColor, PieceType, Square, BACK_RANK, BOARD_SIZE};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard starting position
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[Square::EMPTY; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board holding only the listed pieces at `(row, col)`
    ///
    /// Fails with `OutOfRange` on the first off-board coordinate.
    pub fn with_pieces(pieces: &[(PieceType, PieceColor, (i32, i32))]) -> RulesResult<Self> {
        let mut board = Self::empty();
        for &(piece_type, color, (row, col)) in pieces {
            board.set(row, col, Piece::new(piece_type, color))?;
        }
        Ok(board)
    }

    /// Clear every square, then lay out both armies
    pub fn initialize(&mut self) {
        self.squares = [[Square::EMPTY; BOARD_SIZE]; BOARD_SIZE];

        for color in [PieceColor::White, PieceColor::Black] {
            let back = usize::from(color.back_rank());
            let pawns = color.pawn_start_row() as usize;
            for (col, &piece_type) in BACK_RANK.iter().enumerate() {
                self.squares[back][col] = Square::occupied(Piece::new(piece_type, color));
                self.squares[pawns][col] = Square::occupied(Piece::new(PieceType::Pawn, color));
            }
        }
    }

    /// Square at a raw coordinate, `OutOfRange` when off the board
    pub fn get(&self, row: i32, col: i32) -> RulesResult<Square> {
        let pos = BoardPos::new(row, col)?;
        Ok(self.at(pos))
    }

    /// Overwrite a square with `piece`
    pub fn set(&mut self, row: i32, col: i32, piece: Piece) -> RulesResult<()> {
        let pos = BoardPos::new(row, col)?;
        self.place(pos, Some(piece));
        Ok(())
    }

    pub fn clear(&mut self, row: i32, col: i32) -> RulesResult<()> {
        let pos = BoardPos::new(row, col)?;
        self.place(pos, None);
        Ok(())
    }

    pub fn at(&self, pos: BoardPos) -> Square {
        let (row, col) = pos.index();
        self.squares[row][col]
    }

    pub fn piece_at(&self, pos: BoardPos) -> Option<Piece> {
        self.at(pos).piece
    }

    pub fn is_empty(&self, pos: BoardPos) -> bool {
        self.at(pos).is_empty()
    }

    pub fn place(&mut self, pos: BoardPos, piece: Option<Piece>) {
        let (row, col) = pos.index();
        self.squares[row][col] = Square { piece };
    }

    /// All occupied squares, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (BoardPos, Piece)> + '_ {
        BoardPos::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|(_, p)| *p == piece).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let c = self.squares[row][col].piece.map_or('.', |p| p.symbol());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)
    }
}
