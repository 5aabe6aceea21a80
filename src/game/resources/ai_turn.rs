//! AI turn tracking for games against the server-side AI
//!
//! The server exposes a boolean "is it the AI's turn" flag that the caller
//! refreshes periodically. On its rising edge the board shows an
//! "AI is thinking" hint and locks selection. The hint decays when the flag
//! drops or after a wall-clock grace window, whichever comes first, so a
//! missed refresh can never lock the board forever.
//!
//! Time is passed in explicitly (`now`) so the tracker stays a plain value
//! that tests can drive without sleeping.

use crate::game::components::{GameSnapshot, PieceColor};
use std::time::Duration;
use tracing::debug;
use web_time::Instant;

/// Default grace window for the thinking hint
pub const DEFAULT_THINKING_GRACE: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTurnTracker {
    flag: bool,
    thinking_since: Option<Instant>,
    grace: Duration,
}

impl Default for AiTurnTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THINKING_GRACE)
    }
}

impl AiTurnTracker {
    pub fn new(grace: Duration) -> Self {
        Self {
            flag: false,
            thinking_since: None,
            grace,
        }
    }

    /// Record a freshly fetched AI-turn flag
    pub fn observe_flag(&mut self, flag: bool, now: Instant) {
        match (self.flag, flag) {
            (false, true) => {
                debug!("[AI] AI turn detected, showing thinking hint");
                self.thinking_since = Some(now);
            }
            (true, false) => {
                debug!("[AI] AI turn ended, clearing thinking hint");
                self.thinking_since = None;
            }
            _ => {}
        }
        self.flag = flag;
    }

    pub fn is_ai_turn(&self) -> bool {
        self.flag
    }

    /// Whether the thinking hint is still live at `now`
    pub fn is_thinking(&self, now: Instant) -> bool {
        self.thinking_since
            .is_some_and(|since| now.saturating_duration_since(since) < self.grace)
    }

    /// Whether human selection should be suppressed at `now`
    pub fn blocks_selection(&self, now: Instant) -> bool {
        self.flag || self.is_thinking(now)
    }

    pub fn reset(&mut self) {
        self.flag = false;
        self.thinking_since = None;
    }

    /// Turn indicator text for `game`
    pub fn status_line(&self, game: &GameSnapshot, now: Instant) -> String {
        if !game.is_ai_game() {
            return format!("{}'s turn", game.current_player);
        }

        if game.current_player == PieceColor::White {
            "Your turn".to_string()
        } else if self.is_thinking(now) {
            "AI is thinking...".to_string()
        } else {
            "AI's turn".to_string()
        }
    }
}
