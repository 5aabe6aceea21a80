//! Hypothetical move application
//!
//! Produces the piece set that would result from one move without touching
//! the snapshot it was derived from. Used by the legal move generator to ask
//! "would my king be attacked afterwards".

use super::board_state::PieceSet;
use crate::game::error::{GameError, GameResult};
use crate::game::types::Move;

/// Apply `mv` to a copy of `board_state`
///
/// Any other piece on the destination is captured (removed). The mover takes
/// the destination coordinates and is marked as moved. The returned set has
/// the same number of pieces, or exactly one fewer after a capture.
///
/// # Errors
///
/// [`GameError::NoPieceAtSource`] if nothing stands on the source square.
/// Callers treat that as an illegal move.
pub fn simulate(board_state: &PieceSet, mv: Move) -> GameResult<PieceSet> {
    let from = mv.from();
    let to = mv.to();

    let mut next = board_state.clone();
    let pieces = next.pieces_mut();

    let Some(mut mover_idx) = pieces.iter().position(|p| p.is_on(from)) else {
        return Err(GameError::no_piece_at(from));
    };

    if from == to {
        return Ok(next);
    }

    if let Some(captured_idx) = pieces
        .iter()
        .enumerate()
        .position(|(idx, p)| idx != mover_idx && p.is_on(to))
    {
        pieces.remove(captured_idx);
        if captured_idx < mover_idx {
            mover_idx -= 1;
        }
    }

    let mover = &mut pieces[mover_idx];
    mover.row = to.row;
    mover.col = to.col;
    mover.has_moved = true;

    Ok(next)
}
