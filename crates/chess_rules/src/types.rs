//! Plain-data chess types shared by the board, the rules and the game state
//!
//! Everything here is `Copy`. A board is a fixed array of [`Square`]s and
//! coordinates are [`BoardPos`] values, so there is no ownership graph to
//! manage.
//!
//! # Coordinates
//!
//! `row` 0 is White's back rank, `row` 7 is Black's. `col` 0 is the a-file.
//! Raw coordinates coming from the outside world are `i32` so that off-board
//! values (e.g. a click beside the board) can be represented and rejected.

use crate::error::{RulesError, RulesResult};
use std::fmt;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 8;

/// Standard back rank from the a-file to the h-file
pub const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a forward pawn step
    pub fn pawn_direction(self) -> i32 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }

    /// Row this color's pawns start on
    pub fn pawn_start_row(self) -> i32 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => 6,
        }
    }

    pub fn back_rank(self) -> u8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => f.write_str("White"),
            PieceColor::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Lowercase FEN letter
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

/// A piece occupying a square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: PieceColor) -> Self {
        Self { color, piece_type }
    }

    /// FEN-style symbol: uppercase for White, lowercase for Black
    pub fn symbol(&self) -> char {
        match self.color {
            PieceColor::White => self.piece_type.letter().to_ascii_uppercase(),
            PieceColor::Black => self.piece_type.letter(),
        }
    }
}

/// One cell of the grid. `piece == None` is the empty square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub piece: Option<Piece>,
}

impl Square {
    pub const EMPTY: Square = Square { piece: None };

    pub const fn occupied(piece: Piece) -> Self {
        Self { piece: Some(piece) }
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub fn color(&self) -> Option<PieceColor> {
        self.piece.map(|p| p.color)
    }
}

/// A validated on-board coordinate
///
/// The fields are private so every `BoardPos` in existence is on the board;
/// build one with [`BoardPos::new`] or take it from [`BoardPos::all`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoardPos"))]
pub struct BoardPos {
    row: u8,
    col: u8,
}

/// Unchecked wire form, validated on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoardPos {
    row: i32,
    col: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoardPos> for BoardPos {
    type Error = RulesError;

    fn try_from(raw: RawBoardPos) -> RulesResult<Self> {
        BoardPos::new(raw.row, raw.col)
    }
}

impl BoardPos {
    /// Validate a raw coordinate pair
    pub fn new(row: i32, col: i32) -> RulesResult<Self> {
        if in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::OutOfRange { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// `(row, col)` as array indices
    pub(crate) fn index(self) -> (usize, usize) {
        (usize::from(self.row), usize::from(self.col))
    }

    pub fn row_i32(self) -> i32 {
        i32::from(self.row)
    }

    pub fn col_i32(self) -> i32 {
        i32::from(self.col)
    }

    /// Every square on the board, row-major from (0, 0)
    pub fn all() -> impl Iterator<Item = BoardPos> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| BoardPos { row, col }))
    }
}

impl fmt::Display for BoardPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{}{}", file, self.row + 1)
    }
}

/// True when both coordinates lie in `[0, 7]`
pub fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
