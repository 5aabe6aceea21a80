//! In-process game authority
//!
//! Holds games in memory and validates moves with the same rules the client
//! uses. Backs offline play and the session tests. Unlike a real server it
//! never plays for the AI and never detects mate or draws on its own; callers
//! drive both sides and end the game explicitly.

use super::authority::GameAuthority;
use crate::game::components::{GameSnapshot, GameStatus, PieceColor};
use crate::game::error::{GameError, GameResult};
use crate::game::rules::{in_check, is_legal_move, simulate};
use crate::game::types::{CommittedMove, Move};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct LocalAuthority {
    games: Mutex<HashMap<String, GameSnapshot>>,
}

impl LocalAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a game
    pub async fn insert_game(&self, game: GameSnapshot) {
        info!("[AUTHORITY] Hosting game {}", game.id);
        self.games.lock().await.insert(game.id.clone(), game);
    }

    /// End `game_id` with `status`, as a server does on mate, draw or resignation
    pub async fn end_game(
        &self,
        game_id: &str,
        status: GameStatus,
        winner: Option<PieceColor>,
    ) -> GameResult<()> {
        let mut games = self.games.lock().await;
        let game = games.get_mut(game_id).ok_or_else(|| not_found(game_id))?;
        info!("[AUTHORITY] Game {} ended: {:?}", game_id, status);
        game.status = status;
        game.winner = winner;
        Ok(())
    }

    fn apply(game: &mut GameSnapshot, mv: Move) -> GameResult<CommittedMove> {
        if game.status.is_over() {
            return Err(GameError::MoveRejected {
                message: "Game is already over".to_string(),
            });
        }

        let piece = *game
            .pieces
            .piece_at(mv.from())
            .ok_or_else(|| GameError::MoveRejected {
                message: "No piece at source position".to_string(),
            })?;

        if piece.color != game.current_player {
            return Err(GameError::MoveRejected {
                message: "Not your turn".to_string(),
            });
        }

        if !is_legal_move(&game.pieces, mv) {
            return Err(GameError::MoveRejected {
                message: "Invalid move".to_string(),
            });
        }

        game.pieces = simulate(&game.pieces, mv)?;
        game.move_count += 1;
        game.current_player = piece.color.opponent();

        game.status = if in_check(&game.pieces, game.current_player) {
            GameStatus::Check
        } else {
            GameStatus::Active
        };

        debug!(
            "[AUTHORITY] Game {} move {}: {} ({:?})",
            game.id, game.move_count, mv, game.status
        );

        Ok(CommittedMove {
            mv,
            piece_type: piece.piece_type,
            piece_color: piece.color,
            move_number: game.move_count,
        })
    }
}

fn not_found(game_id: &str) -> GameError {
    GameError::Authority {
        message: format!("Game not found: {}", game_id),
    }
}

#[async_trait]
impl GameAuthority for LocalAuthority {
    async fn fetch_game(&self, game_id: &str) -> GameResult<GameSnapshot> {
        self.games
            .lock()
            .await
            .get(game_id)
            .cloned()
            .ok_or_else(|| not_found(game_id))
    }

    async fn submit_move(&self, game_id: &str, mv: Move) -> GameResult<CommittedMove> {
        let mut games = self.games.lock().await;
        let game = games.get_mut(game_id).ok_or_else(|| not_found(game_id))?;
        Self::apply(game, mv)
    }

    async fn is_ai_turn(&self, game_id: &str) -> GameResult<bool> {
        self.games
            .lock()
            .await
            .get(game_id)
            .map(GameSnapshot::is_ai_turn)
            .ok_or_else(|| not_found(game_id))
    }
}
