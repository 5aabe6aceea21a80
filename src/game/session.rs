//! Board session - one player's view of one game
//!
//! Ties the read-only snapshot, the selection state machine and the AI-turn
//! tracker to a [`GameAuthority`]. Clicks go through the turn gate and the
//! legal move generator; a chosen destination is submitted to the server,
//! which has the final word.

use crate::game::components::{GameSnapshot, Square};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{check_banner, AiTurnTracker, Banner, ClickOutcome, Selection};
use crate::networking::GameAuthority;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use web_time::Instant;

/// Notice shown after the server refuses a submitted move
pub const INVALID_MOVE_NOTICE: &str = "Invalid move";

pub struct BoardSession<A> {
    authority: A,
    game: GameSnapshot,
    selection: Selection,
    ai: AiTurnTracker,
    notice: Option<String>,
}

impl<A: GameAuthority> BoardSession<A> {
    pub fn new(authority: A, game: GameSnapshot, thinking_grace: Duration) -> Self {
        Self {
            authority,
            game,
            selection: Selection::default(),
            ai: AiTurnTracker::new(thinking_grace),
            notice: None,
        }
    }

    /// Fetch `game_id` from the authority and open a session on it
    pub async fn open(authority: A, game_id: &str, thinking_grace: Duration) -> GameResult<Self> {
        let game = authority.fetch_game(game_id).await?;
        info!("[SESSION] Opened game {} ({:?})", game.id, game.game_type);
        Ok(Self::new(authority, game, thinking_grace))
    }

    pub fn game(&self) -> &GameSnapshot {
        &self.game
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn ai_tracker(&self) -> &AiTurnTracker {
        &self.ai
    }

    pub fn authority(&self) -> &A {
        &self.authority
    }

    /// Last error notice, cleared by the next accepted move
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub async fn click(&mut self, square: Square) -> GameResult<ClickOutcome> {
        self.click_at(square, Instant::now()).await
    }

    /// Handle a click on `square` at time `now`
    ///
    /// Refused clicks are not errors. A submitted move the server refuses
    /// returns the server error after setting the "Invalid move" notice.
    /// Once the server has committed a move the outcome is `Submit` even if
    /// the follow-up refresh fails.
    pub async fn click_at(&mut self, square: Square, now: Instant) -> GameResult<ClickOutcome> {
        let outcome = self.selection.click(&self.game, square, &self.ai, now);

        let ClickOutcome::Submit(mv) = outcome else {
            return Ok(outcome);
        };

        match self.authority.submit_move(&self.game.id, mv).await {
            Ok(committed) => {
                info!(
                    "[SESSION] Move {} accepted: {:?} {:?} {}",
                    committed.move_number, committed.piece_color, committed.piece_type, mv
                );
                self.notice = None;
                if let Err(e) = self.refresh_at(now).await {
                    warn!("[SESSION] Move {} committed but refresh failed: {}", mv, e);
                }
                Ok(outcome)
            }
            Err(e) => {
                if matches!(e, GameError::MoveRejected { .. }) {
                    warn!("[SESSION] Server rejected locally legal move {}: {}", mv, e);
                } else {
                    warn!("[SESSION] Failed to submit move {}: {}", mv, e);
                }
                self.notice = Some(INVALID_MOVE_NOTICE.to_string());
                self.selection.clear();
                Err(e)
            }
        }
    }

    /// Replace the snapshot if it differs from the held one
    ///
    /// Any selection made against the old snapshot is dropped.
    pub fn apply_snapshot(&mut self, game: GameSnapshot) -> bool {
        if game == self.game {
            return false;
        }

        debug!(
            "[SESSION] New snapshot for {}: move {} {:?}",
            game.id, game.move_count, game.status
        );
        self.game = game;
        self.selection.clear();
        true
    }

    pub fn apply_ai_flag(&mut self, flag: bool, now: Instant) {
        self.ai.observe_flag(flag, now);
    }

    pub async fn refresh(&mut self) -> GameResult<()> {
        self.refresh_at(Instant::now()).await
    }

    async fn refresh_at(&mut self, now: Instant) -> GameResult<()> {
        let game = self.authority.fetch_game(&self.game.id).await?;
        self.apply_snapshot(game);

        if self.game.is_ai_game() {
            let flag = self.authority.is_ai_turn(&self.game.id).await?;
            self.apply_ai_flag(flag, now);
        }
        Ok(())
    }

    /// Pull any fresher values published by the pollers
    pub fn sync(
        &mut self,
        snapshots: &mut watch::Receiver<Option<GameSnapshot>>,
        ai_flag: &mut watch::Receiver<bool>,
        now: Instant,
    ) {
        if snapshots.has_changed().unwrap_or(false) {
            let latest = snapshots.borrow_and_update().clone();
            if let Some(game) = latest {
                self.apply_snapshot(game);
            }
        }

        if ai_flag.has_changed().unwrap_or(false) {
            let flag = *ai_flag.borrow_and_update();
            self.apply_ai_flag(flag, now);
        }
    }

    pub fn check_banner(&self) -> Option<Banner> {
        check_banner(&self.game)
    }

    pub fn status_line(&self, now: Instant) -> String {
        self.ai.status_line(&self.game, now)
    }
}
