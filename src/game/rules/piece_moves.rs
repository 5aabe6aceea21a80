//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece attacks and moves.
//! Pure functions with no side effects - easy to test.
//!
//! Two predicates share the same geometry:
//!
//! - [`attacks`] answers "does this piece threaten that square" and drives
//!   check detection. Pawns threaten diagonally only.
//! - [`can_move_to`] answers "may this piece move there, ignoring king
//!   safety". It adds the own-color capture ban and replaces the pawn's
//!   threat geometry with its real moves: straight advances onto empty
//!   squares and diagonal steps onto enemy pieces.
//!
//! For every other piece the squares it threatens are the squares it can
//! move to.

use super::board_state::PieceSet;
use crate::game::components::{Piece, PieceColor, PieceType, Square};

/// Check if `piece` attacks `target`
///
/// Sliding pieces need a clear path; knights, kings and pawns do not. A piece
/// never attacks the square it stands on.
pub fn attacks(piece: &Piece, target: Square, board_state: &PieceSet) -> bool {
    let from = piece.square();
    if from == target || !from.is_on_board() || !target.is_on_board() {
        return false;
    }

    match piece.piece_type {
        PieceType::Pawn => is_pawn_attack(from, target, piece.color),
        PieceType::Knight => is_knight_move(from, target),
        PieceType::Bishop => is_bishop_move(from, target, board_state),
        PieceType::Rook => is_rook_move(from, target, board_state),
        PieceType::Queen => is_queen_move(from, target, board_state),
        PieceType::King => is_king_move(from, target),
    }
}

/// Check if `piece` may move to `to`, ignoring whether its own king ends up in check
pub fn can_move_to(piece: &Piece, to: Square, board_state: &PieceSet) -> bool {
    let from = piece.square();

    // Can't move to the same square
    if from == to {
        return false;
    }

    // Can't move off the board
    if !to.is_on_board() || !from.is_on_board() {
        return false;
    }

    // Can't capture your own pieces
    if board_state.color_at(to) == Some(piece.color) {
        return false;
    }

    match piece.piece_type {
        PieceType::Pawn => is_valid_pawn_move(from, to, piece.color, board_state, piece.has_moved),
        _ => attacks(piece, to, board_state),
    }
}

/// All squares `piece` may move to, ignoring king safety, in row-major order
pub fn pseudo_legal_destinations(piece: &Piece, board_state: &PieceSet) -> Vec<Square> {
    Square::all()
        .filter(|&to| can_move_to(piece, to, board_state))
        .collect()
}

fn is_pawn_attack(from: Square, to: Square, color: PieceColor) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_col.abs() == 1 && d_row == color.forward_direction()
}

fn is_valid_pawn_move(
    from: Square,
    to: Square,
    color: PieceColor,
    board_state: &PieceSet,
    has_moved: bool,
) -> bool {
    let direction = color.forward_direction();
    let (d_row, d_col) = from.delta_to(to);

    // Forward move
    if d_col == 0 && d_row == direction {
        return board_state.is_empty(to);
    }

    // Double move from starting position
    if d_col == 0 && d_row == 2 * direction && !has_moved {
        let Some(intermediate) = from.offset(direction, 0) else {
            return false;
        };
        return board_state.is_empty(intermediate) && board_state.is_empty(to);
    }

    // Capture diagonally
    if d_col.abs() == 1 && d_row == direction {
        return matches!(board_state.color_at(to), Some(target) if target != color);
    }

    false
}

fn is_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    let (d_row, d_col) = (d_row.abs(), d_col.abs());
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

fn is_bishop_move(from: Square, to: Square, board_state: &PieceSet) -> bool {
    let (d_row, d_col) = from.delta_to(to);

    // Must move diagonally
    if d_row.abs() != d_col.abs() {
        return false;
    }

    board_state.is_path_clear(from, to)
}

fn is_rook_move(from: Square, to: Square, board_state: &PieceSet) -> bool {
    // Must move horizontally or vertically
    if from.row != to.row && from.col != to.col {
        return false;
    }

    board_state.is_path_clear(from, to)
}

fn is_queen_move(from: Square, to: Square, board_state: &PieceSet) -> bool {
    is_rook_move(from, to, board_state) || is_bishop_move(from, to, board_state)
}

fn is_king_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}
