//! Chess rules module - Pure game logic without session coupling
//!
//! Implements move legality and check detection over a sparse piece set,
//! using pure functions so the same code backs both move highlighting during
//! selection and the check banner.
//!
//! # Architecture
//!
//! - **Pure functions** for move validation (easy to unit test)
//! - **Snapshot-based** queries: every call borrows one [`PieceSet`], so a
//!   computation can never observe a snapshot replaced halfway through
//! - **No session state**: selection and AI-turn tracking live in
//!   [`crate::game::resources`]
//!
//! # Module Structure
//!
//! - `board_state` - Piece set queries and path clearance
//! - `piece_moves` - Attack and movement patterns per piece type
//! - `simulation` - Hypothetical move application
//! - `check` - King attack detection
//! - `legal` - Legal move generation
//!
//! # Scope
//!
//! Castling, en passant, promotion and draw detection are not modelled.
//! Checkmate is reported by the game server, never derived here.

pub mod board_state;
pub mod check;
pub mod legal;
pub mod piece_moves;
pub mod simulation;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use board_state::PieceSet;
pub use check::{checkers, in_check};
pub use legal::{is_legal_move, legal_moves, legal_moves_for};
pub use piece_moves::{attacks, can_move_to, pseudo_legal_destinations};
pub use simulation::simulate;
