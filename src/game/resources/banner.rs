//! Check banner policy
//!
//! Decides what, if anything, to announce above the board for a snapshot.
//! Checkmate and other endings come from the server status; plain check is
//! recomputed locally from the pieces so the banner follows the board even
//! when the server status lags.

use crate::game::components::{GameSnapshot, GameStatus, PieceColor};
use crate::game::rules::in_check;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// The king of this color is in check
    Check {
        color: PieceColor,
        against_ai: bool,
    },
    /// The server ended the game
    GameOver {
        status: GameStatus,
        winner: Option<PieceColor>,
    },
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Banner::Check {
                against_ai: true, ..
            } => write!(f, "Your King is in Check!"),
            Banner::Check { color, .. } => write!(f, "{} King is in Check!", color),
            Banner::GameOver {
                status: GameStatus::Checkmate,
                winner: Some(winner),
            } => write!(f, "Checkmate! {} wins", winner),
            Banner::GameOver {
                winner: Some(winner),
                ..
            } => write!(f, "Game over. {} wins", winner),
            Banner::GameOver { status, .. } => write!(f, "Game over ({:?})", status),
        }
    }
}

/// Banner for `game`, if any
///
/// In games against the AI only the human (White) side is ever announced as
/// in check, and only while it is White's move. In human games the player to
/// move is checked.
pub fn check_banner(game: &GameSnapshot) -> Option<Banner> {
    match game.status {
        GameStatus::Active | GameStatus::Check => {}
        status => {
            return Some(Banner::GameOver {
                status,
                winner: game.winner,
            })
        }
    }

    if game.is_ai_game() && game.current_player != PieceColor::White {
        return None;
    }

    let color = game.current_player;

    in_check(&game.pieces, color).then_some(Banner::Check {
        color,
        against_ai: game.is_ai_game(),
    })
}
