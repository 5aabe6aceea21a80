//! Turn gate - decides whether a clicked piece may be selected
//!
//! Checks run in a fixed order so the refusal reason is deterministic:
//! game over, AI activity (AI games only), empty square, then ownership.

use super::ai_turn::AiTurnTracker;
use crate::game::components::{GameSnapshot, Piece, PieceColor, Square};
use crate::game::error::SelectionRefusal;
use web_time::Instant;

/// Refusal raised before the clicked square is even looked at
///
/// Also used by the selection state machine to ignore clicks while a piece
/// is already selected.
pub fn blocking_refusal(
    game: &GameSnapshot,
    ai: &AiTurnTracker,
    now: Instant,
) -> Option<SelectionRefusal> {
    if game.status.is_over() {
        return Some(SelectionRefusal::GameOver);
    }

    if game.is_ai_game() {
        if ai.is_ai_turn() {
            return Some(SelectionRefusal::AiTurn);
        }
        if ai.is_thinking(now) {
            return Some(SelectionRefusal::AiThinking);
        }
    }

    None
}

/// Admit or refuse a selection on `square`
///
/// Returns the piece to be selected, or the first reason it may not be.
pub fn check_selection<'a>(
    game: &'a GameSnapshot,
    square: Square,
    ai: &AiTurnTracker,
    now: Instant,
) -> Result<&'a Piece, SelectionRefusal> {
    if let Some(refusal) = blocking_refusal(game, ai, now) {
        return Err(refusal);
    }

    let piece = game
        .pieces
        .piece_at(square)
        .ok_or(SelectionRefusal::EmptySquare)?;

    if piece.color != game.current_player {
        return Err(SelectionRefusal::NotYourTurn);
    }

    if game.is_ai_game() && piece.color != PieceColor::White {
        return Err(SelectionRefusal::NotHumanColor);
    }

    Ok(piece)
}
