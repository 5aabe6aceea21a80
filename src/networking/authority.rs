//! Game server boundary
//!
//! The server owns every game. The client only reads snapshots, asks whether
//! the AI is to move, and submits moves it has already checked locally.

use crate::game::components::GameSnapshot;
use crate::game::error::GameResult;
use crate::game::types::{CommittedMove, Move};
use async_trait::async_trait;
use std::sync::Arc;

/// The authoritative side of a game
///
/// Implementations map their own transport failures to
/// [`GameError::Authority`](crate::game::error::GameError::Authority) and
/// refusals to [`GameError::MoveRejected`](crate::game::error::GameError::MoveRejected).
#[async_trait]
pub trait GameAuthority: Send + Sync {
    /// Current snapshot of `game_id`
    async fn fetch_game(&self, game_id: &str) -> GameResult<GameSnapshot>;

    /// Submit `mv` for validation and commit
    async fn submit_move(&self, game_id: &str, mv: Move) -> GameResult<CommittedMove>;

    /// Whether the server-side AI is to move in `game_id`
    async fn is_ai_turn(&self, game_id: &str) -> GameResult<bool>;
}

#[async_trait]
impl<A: GameAuthority + ?Sized> GameAuthority for Arc<A> {
    async fn fetch_game(&self, game_id: &str) -> GameResult<GameSnapshot> {
        (**self).fetch_game(game_id).await
    }

    async fn submit_move(&self, game_id: &str, mv: Move) -> GameResult<CommittedMove> {
        (**self).submit_move(game_id, mv).await
    }

    async fn is_ai_turn(&self, game_id: &str) -> GameResult<bool> {
        (**self).is_ai_turn(game_id).await
    }
}
