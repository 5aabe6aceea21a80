//! Piece and square types shared by the rules and the session layer
//!
//! These mirror the piece records the game server sends in its snapshots:
//! `{ type, color, row, col, hasMoved }`. Serde attributes keep the wire
//! names (`SCREAMING_CASE` enums, camelCase fields) so a snapshot can be
//! deserialized straight from the API response.
//!
//! # Board orientation
//!
//! Row 0 is Black's back rank and row 7 is White's back rank, matching the
//! server's initial layout. White pawns therefore advance toward decreasing
//! rows and Black pawns toward increasing rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// Returns the other side
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a single pawn advance for this color
    ///
    /// White moves toward row 0, Black toward row 7.
    pub fn forward_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Wire name, as used in snapshots and banner text
    pub fn as_str(self) -> &'static str {
        match self {
            PieceColor::White => "WHITE",
            PieceColor::Black => "BLACK",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];
}

/// A board coordinate
///
/// Rows and columns are `0..8` on the board. Values outside that range can
/// still be represented (they arrive from callers unchecked) and are simply
/// never occupied or reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// True if both coordinates lie on the 8x8 board
    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Every board square in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }

    /// Signed `(Δrow, Δcol)` from `self` to `to`
    ///
    /// Saturates at the `i8` bounds for off-board squares.
    pub fn delta_to(self, to: Square) -> (i8, i8) {
        let delta = |from: u8, to: u8| {
            (i16::from(to) - i16::from(from)).clamp(i16::from(i8::MIN), i16::from(i8::MAX)) as i8
        };
        (delta(self.row, to.row), delta(self.col, to.col))
    }

    /// Offsets this square, returning `None` if the result leaves the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        let size = i16::from(BOARD_SIZE);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece as it appears in a snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    pub color: PieceColor,
    pub row: u8,
    pub col: u8,
    #[serde(default)]
    pub has_moved: bool,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: PieceColor, row: u8, col: u8) -> Self {
        Self {
            piece_type,
            color,
            row,
            col,
            has_moved: false,
        }
    }

    /// Builder-style setter for `has_moved`
    pub fn moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    pub fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }

    pub fn is_on(&self, square: Square) -> bool {
        self.row == square.row && self.col == square.col
    }

    /// Unicode glyph used by text renderings of the board
    pub fn symbol(&self) -> char {
        match (self.color, self.piece_type) {
            (PieceColor::White, PieceType::King) => '♔',
            (PieceColor::White, PieceType::Queen) => '♕',
            (PieceColor::White, PieceType::Rook) => '♖',
            (PieceColor::White, PieceType::Bishop) => '♗',
            (PieceColor::White, PieceType::Knight) => '♘',
            (PieceColor::White, PieceType::Pawn) => '♙',
            (PieceColor::Black, PieceType::King) => '♚',
            (PieceColor::Black, PieceType::Queen) => '♛',
            (PieceColor::Black, PieceType::Rook) => '♜',
            (PieceColor::Black, PieceType::Bishop) => '♝',
            (PieceColor::Black, PieceType::Knight) => '♞',
            (PieceColor::Black, PieceType::Pawn) => '♟',
        }
    }
}
