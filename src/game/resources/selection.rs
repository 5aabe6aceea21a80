use super::ai_turn::AiTurnTracker;
use super::turn_gate::{blocking_refusal, check_selection};
use crate::game::components::{GameSnapshot, Square};
use crate::game::error::SelectionRefusal;
use crate::game::rules::legal_moves;
use crate::game::types::Move;
use tracing::debug;
use web_time::Instant;

/// Current piece selection
///
/// `destinations` is computed once when the piece is selected and is the
/// exact set of squares a second click may submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        from: Square,
        destinations: Vec<Square>,
    },
}

/// What a click did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece is now selected
    Selected(Square),
    /// A destination was chosen; the move should be sent to the server
    Submit(Move),
    /// The selection was dropped
    Cleared,
    /// The click was ignored
    Refused(SelectionRefusal),
}

impl Selection {
    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected { .. })
    }

    pub fn selected_square(&self) -> Option<Square> {
        match self {
            Selection::Selected { from, .. } => Some(*from),
            Selection::Idle => None,
        }
    }

    /// Highlighted destinations, empty when idle
    pub fn destinations(&self) -> &[Square] {
        match self {
            Selection::Selected { destinations, .. } => destinations,
            Selection::Idle => &[],
        }
    }

    /// Advance the selection for a click on `square`
    pub fn click(
        &mut self,
        game: &GameSnapshot,
        square: Square,
        ai: &AiTurnTracker,
        now: Instant,
    ) -> ClickOutcome {
        match self {
            Selection::Idle => match check_selection(game, square, ai, now) {
                Ok(piece) => {
                    let destinations = legal_moves(&game.pieces, square);
                    debug!(
                        "[SELECTION] Selected {:?} {:?} at {} with {} destinations",
                        piece.color,
                        piece.piece_type,
                        square,
                        destinations.len()
                    );
                    *self = Selection::Selected {
                        from: square,
                        destinations,
                    };
                    ClickOutcome::Selected(square)
                }
                Err(reason) => {
                    debug!("[SELECTION] Ignored click on {}: {}", square, reason);
                    ClickOutcome::Refused(reason)
                }
            },
            Selection::Selected { from, destinations } => {
                if let Some(reason) = blocking_refusal(game, ai, now) {
                    debug!("[SELECTION] Ignored click on {}: {}", square, reason);
                    return ClickOutcome::Refused(reason);
                }

                let outcome = if destinations.contains(&square) {
                    let mv = Move::new(*from, square);
                    debug!("[SELECTION] Submitting move {}", mv);
                    ClickOutcome::Submit(mv)
                } else {
                    debug!("[SELECTION] Cleared selection on {}", from);
                    ClickOutcome::Cleared
                };
                self.clear();
                outcome
            }
        }
    }
}
