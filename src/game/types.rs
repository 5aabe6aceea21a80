//! Move types exchanged with the game server

use crate::game::components::{PieceColor, PieceType, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A requested move, as sent to the server's `makeMove` mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from_row: from.row,
            from_col: from.col,
            to_row: to.row,
            to_col: to.col,
        }
    }

    pub fn from(&self) -> Square {
        Square::new(self.from_row, self.from_col)
    }

    pub fn to(&self) -> Square {
        Square::new(self.to_row, self.to_col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from(), self.to())
    }
}

/// A move the server accepted, echoed back with its bookkeeping fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommittedMove {
    #[serde(flatten)]
    pub mv: Move,
    pub piece_type: PieceType,
    pub piece_color: PieceColor,
    pub move_number: u32,
}
