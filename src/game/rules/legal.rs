//! Legal move generation
//!
//! Brute force by design: every board square is tried against the piece's
//! movement pattern, and each survivor is simulated to make sure the mover's
//! own king is not left attacked. That is at most 63 simulations per
//! selection, each over at most 32 pieces.

use super::board_state::PieceSet;
use super::check::in_check;
use super::piece_moves::can_move_to;
use super::simulation::simulate;
use crate::game::components::{PieceColor, Square};
use crate::game::types::Move;
use tracing::trace;

/// Legal destinations for the piece on `from`, in row-major order
///
/// An empty square yields no destinations.
pub fn legal_moves(board_state: &PieceSet, from: Square) -> Vec<Square> {
    let Some(piece) = board_state.piece_at(from) else {
        return Vec::new();
    };

    let destinations: Vec<Square> = Square::all()
        .filter(|&to| to != from && can_move_to(piece, to, board_state))
        .filter(|&to| leaves_king_safe(board_state, Move::new(from, to), piece.color))
        .collect();

    trace!(
        "[RULES] {:?} {:?} at {} has {} legal destinations",
        piece.color,
        piece.piece_type,
        from,
        destinations.len()
    );

    destinations
}

/// Whether `mv` is legal for whatever piece stands on its source square
pub fn is_legal_move(board_state: &PieceSet, mv: Move) -> bool {
    let Some(piece) = board_state.piece_at(mv.from()) else {
        return false;
    };

    can_move_to(piece, mv.to(), board_state) && leaves_king_safe(board_state, mv, piece.color)
}

/// Every legal move available to `color`
///
/// Pieces are visited in snapshot order, destinations in row-major order.
pub fn legal_moves_for(board_state: &PieceSet, color: PieceColor) -> Vec<Move> {
    board_state
        .pieces_of(color)
        .map(|piece| piece.square())
        .flat_map(|from| {
            legal_moves(board_state, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

fn leaves_king_safe(board_state: &PieceSet, mv: Move, mover: PieceColor) -> bool {
    match simulate(board_state, mv) {
        Ok(after) => !in_check(&after, mover),
        Err(_) => false,
    }
}
