//! Error types for game module
//!
//! Provides custom error types for the rules engine and the session layer
//! that talks to the game server. Rules queries themselves are total; only
//! the move simulator and the server boundary produce errors.

use crate::game::components::Square;
use std::fmt;

/// Why a selection attempt was refused
///
/// Refusals are expected during normal play and are never shown to the user;
/// the click is simply ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRefusal {
    /// No piece on the clicked square
    EmptySquare,
    /// The piece does not belong to the player to move
    NotYourTurn,
    /// In games against the AI the human may only select White pieces
    NotHumanColor,
    /// The server reports that the AI is to move
    AiTurn,
    /// An AI move is believed to be in flight
    AiThinking,
    /// The server has ended the game
    GameOver,
}

impl fmt::Display for SelectionRefusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SelectionRefusal::EmptySquare => "no piece on that square",
            SelectionRefusal::NotYourTurn => "not that color's turn",
            SelectionRefusal::NotHumanColor => "human plays White against the AI",
            SelectionRefusal::AiTurn => "AI is to move",
            SelectionRefusal::AiThinking => "AI is thinking",
            SelectionRefusal::GameOver => "game is over",
        };
        f.write_str(reason)
    }
}

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Simulated a move from an empty square
    #[error("No piece at source square ({row}, {col})")]
    NoPieceAtSource { row: u8, col: u8 },

    /// The server refused a move the client considered legal
    #[error("Move rejected by server: {message}")]
    MoveRejected { message: String },

    /// The server could not be reached or returned garbage
    #[error("Game server error: {message}")]
    Authority { message: String },
}

impl GameError {
    pub fn no_piece_at(square: Square) -> Self {
        GameError::NoPieceAtSource {
            row: square.row,
            col: square.col,
        }
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
