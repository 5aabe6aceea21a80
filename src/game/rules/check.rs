//! Check detection

use super::board_state::PieceSet;
use super::piece_moves::attacks;
use crate::game::components::{PieceColor, Square};
use tracing::debug;

/// Whether the king of `color` is attacked by any opposing piece
///
/// A piece set without a king of `color` reports `false`. Partial or
/// malformed snapshots are tolerated rather than rejected.
pub fn in_check(board_state: &PieceSet, color: PieceColor) -> bool {
    let Some(king) = board_state.find_king(color) else {
        debug!("[RULES] No {} king in piece set, reporting not in check", color);
        return false;
    };

    board_state
        .pieces_of(color.opponent())
        .any(|piece| attacks(piece, king, board_state))
}

/// Squares of every opposing piece attacking the king of `color`
///
/// Empty when the king is missing or not attacked.
pub fn checkers(board_state: &PieceSet, color: PieceColor) -> Vec<Square> {
    let Some(king) = board_state.find_king(color) else {
        return Vec::new();
    };

    board_state
        .pieces_of(color.opponent())
        .filter(|piece| attacks(piece, king, board_state))
        .map(|piece| piece.square())
        .collect()
}
