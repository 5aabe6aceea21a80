//! Game snapshot as reported by the game server
//!
//! A [`GameSnapshot`] is a read-only copy of the authoritative game. The
//! client never advances it; a newer snapshot simply replaces the old one.

use crate::game::components::PieceColor;
use crate::game::rules::PieceSet;
use serde::{Deserialize, Serialize};

/// Server-side game status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    #[default]
    Active,
    Check,
    Checkmate,
    Stalemate,
    Draw,
    Resigned,
}

impl GameStatus {
    /// True once the server has ended the game
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw | GameStatus::Resigned
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    #[default]
    HumanVsHuman,
    HumanVsAi,
}

/// AI strength requested at game creation
///
/// Only displayed client-side; the search itself runs on the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AiDifficulty {
    Normal,
    Hard,
    Impossible,
}

impl AiDifficulty {
    pub fn description(self) -> &'static str {
        match self {
            AiDifficulty::Normal => "normal",
            AiDifficulty::Hard => "hard",
            AiDifficulty::Impossible => "impossible",
        }
    }
}

/// Snapshot of one game
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub id: String,
    #[serde(default)]
    pub status: GameStatus,
    pub current_player: PieceColor,
    #[serde(default)]
    pub winner: Option<PieceColor>,
    #[serde(default)]
    pub game_type: GameType,
    #[serde(default)]
    pub ai_difficulty: Option<AiDifficulty>,
    #[serde(default)]
    pub ai_color: Option<PieceColor>,
    #[serde(default)]
    pub move_count: u32,
    pub pieces: PieceSet,
}

impl GameSnapshot {
    /// A fresh human-vs-human game in the standard starting position
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: GameStatus::Active,
            current_player: PieceColor::White,
            winner: None,
            game_type: GameType::HumanVsHuman,
            ai_difficulty: None,
            ai_color: None,
            move_count: 0,
            pieces: PieceSet::standard(),
        }
    }

    /// A fresh game against the AI; the human always plays White
    pub fn new_vs_ai(id: impl Into<String>, difficulty: AiDifficulty) -> Self {
        Self {
            game_type: GameType::HumanVsAi,
            ai_difficulty: Some(difficulty),
            ai_color: Some(PieceColor::Black),
            ..Self::new(id)
        }
    }

    pub fn is_ai_game(&self) -> bool {
        self.game_type == GameType::HumanVsAi
    }

    /// True if this snapshot says the AI is to move
    pub fn is_ai_turn(&self) -> bool {
        self.is_ai_game() && self.ai_color == Some(self.current_player)
    }
}
