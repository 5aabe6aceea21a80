//! Background polling of the game server
//!
//! Each poller owns a `watch` sender and republishes only when the fetched
//! value changed. Fetch failures are logged and the next tick retries. A
//! poller stops once every receiver has been dropped. Periods shorter than
//! [`MIN_POLL_INTERVAL`] are raised to it.

use super::authority::GameAuthority;
use crate::game::components::GameSnapshot;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Shortest period a poller will tick at
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Poll `game_id` every `interval`, publishing snapshots that differ from the last one
///
/// The receiver starts out holding `None` until the first successful fetch.
pub fn spawn_snapshot_poller<A>(
    authority: Arc<A>,
    game_id: String,
    interval: Duration,
) -> (watch::Receiver<Option<GameSnapshot>>, JoinHandle<()>)
where
    A: GameAuthority + ?Sized + 'static,
{
    let (tx, rx) = watch::channel(None);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(MIN_POLL_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = tx.closed() => break,
            }

            match authority.fetch_game(&game_id).await {
                Ok(game) => {
                    tx.send_if_modified(|current| {
                        if current.as_ref() == Some(&game) {
                            false
                        } else {
                            *current = Some(game);
                            true
                        }
                    });
                }
                Err(e) => warn!("[POLL] Failed to fetch game {}: {}", game_id, e),
            }
        }

        debug!("[POLL] Snapshot poller for {} stopped", game_id);
    });

    (rx, task)
}

/// Poll the AI-turn flag of `game_id` every `interval`
///
/// Only games against the AI have a meaningful flag; with `ai_game` false
/// the task exits at once and the receiver keeps reporting `false`.
pub fn spawn_ai_flag_poller<A>(
    authority: Arc<A>,
    game_id: String,
    interval: Duration,
    ai_game: bool,
) -> (watch::Receiver<bool>, JoinHandle<()>)
where
    A: GameAuthority + ?Sized + 'static,
{
    let (tx, rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        if !ai_game {
            debug!("[POLL] Game {} has no AI opponent, not polling AI flag", game_id);
            return;
        }

        let mut ticker = tokio::time::interval(interval.max(MIN_POLL_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = tx.closed() => break,
            }

            match authority.is_ai_turn(&game_id).await {
                Ok(flag) => {
                    tx.send_if_modified(|current| {
                        let changed = *current != flag;
                        *current = flag;
                        changed
                    });
                }
                Err(e) => warn!("[POLL] Failed to fetch AI turn for {}: {}", game_id, e),
            }
        }

        debug!("[POLL] AI flag poller for {} stopped", game_id);
    });

    (rx, task)
}
