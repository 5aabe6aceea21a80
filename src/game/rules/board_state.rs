//! Board state representation for move validation
//!
//! [`PieceSet`] is the sparse piece collection carried by every snapshot.
//! All queries are linear scans; with at most 32 pieces this is cheaper than
//! maintaining an index that would have to be rebuilt for every snapshot.
//!
//! At most one piece per square is assumed but not enforced. When the
//! assumption is violated, lookups return the first matching piece.

use crate::game::components::{Piece, PieceColor, PieceType, Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};

const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Represents the pieces on the board for move validation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceSet {
    pieces: Vec<Piece>,
}

impl PieceSet {
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    /// The server's initial layout: White on rows 6-7, Black on rows 0-1
    pub fn standard() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for (color, back, pawns) in [(PieceColor::White, 7, 6), (PieceColor::Black, 0, 1)] {
            for (col, piece_type) in BACK_ROW.iter().enumerate() {
                pieces.push(Piece::new(*piece_type, color, back, col as u8));
            }
            for col in 0..BOARD_SIZE {
                pieces.push(Piece::new(PieceType::Pawn, color, pawns, col));
            }
        }
        Self { pieces }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty_set(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn as_slice(&self) -> &[Piece] {
        &self.pieces
    }

    /// First piece occupying `square`, if any
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.is_on(square))
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn color_at(&self, square: Square) -> Option<PieceColor> {
        self.piece_at(square).map(|p| p.color)
    }

    /// Square of the first king of `color`
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces
            .iter()
            .find(|p| p.piece_type == PieceType::King && p.color == color)
            .map(Piece::square)
    }

    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    /// Whether every square strictly between `from` and `to` is empty
    ///
    /// Walks the unit step `(sign(Δrow), sign(Δcol))` from `from` toward
    /// `to`, excluding both endpoints. Only straight and diagonal lines have a
    /// corridor; any other pair reports `false`. Equal endpoints report `true`.
    /// The answer is the same with the endpoints swapped. Off-board endpoints
    /// have no corridor either.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }

        let (d_row, d_col) = from.delta_to(to);
        if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
            return false;
        }

        let step_row = d_row.signum();
        let step_col = d_col.signum();
        let mut row = from.row as i8 + step_row;
        let mut col = from.col as i8 + step_col;

        while (row, col) != (to.row as i8, to.col as i8) {
            if !self.is_empty(Square::new(row as u8, col as u8)) {
                return false;
            }
            row += step_row;
            col += step_col;
        }

        true
    }

    pub(crate) fn pieces_mut(&mut self) -> &mut Vec<Piece> {
        &mut self.pieces
    }
}

impl From<Vec<Piece>> for PieceSet {
    fn from(pieces: Vec<Piece>) -> Self {
        Self::new(pieces)
    }
}

impl FromIterator<Piece> for PieceSet {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PieceSet {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}
