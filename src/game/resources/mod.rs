//! Board-side interaction state
//!
//! Everything here is ephemeral client state owned by the caller and threaded
//! through explicitly. None of it is authoritative: the game server validates
//! every submitted move and owns the game itself.
//!
//! # State Categories
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected piece and its legal destinations
//! - [`check_selection`] - Turn gate deciding which pieces may be selected
//!
//! ## AI Opponent
//! - [`AiTurnTracker`] - AI-turn flag plus the decaying "AI is thinking" hint
//!
//! ## Game Status
//! - [`Banner`] - Check and game-over announcements derived from a snapshot
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut selection = Selection::default();
//! let ai = AiTurnTracker::default();
//!
//! match selection.click(&game, Square::new(6, 4), &ai, Instant::now()) {
//!     ClickOutcome::Submit(mv) => authority.submit_move(&game.id, mv).await?,
//!     ClickOutcome::Selected(_) => highlight(selection.destinations()),
//!     _ => {}
//! }
//! ```

pub mod ai_turn;
pub mod banner;
pub mod selection;
pub mod turn_gate;

pub use ai_turn::{AiTurnTracker, DEFAULT_THINKING_GRACE};
pub use banner::{check_banner, Banner};
pub use selection::{ClickOutcome, Selection};
pub use turn_gate::{blocking_refusal, check_selection};
