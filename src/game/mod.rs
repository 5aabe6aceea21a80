//! Chess game logic module - Client-side legality and check detection
//!
//! Implements the rules a chess client needs to highlight legal moves and
//! announce check, plus the interaction state around them. The game server
//! remains the authority; nothing here commits a move.
//!
//! # Module Organization
//!
//! - `components` - Plain data (Piece, Square, GameSnapshot)
//! - `types` - Move and CommittedMove as exchanged with the server
//! - `rules` - Pure chess logic (move validation, simulation, check)
//! - `resources` - Interaction state (Selection, AiTurnTracker, Banner)
//! - `session` - BoardSession tying the above to a GameAuthority
//! - `error` - GameError and SelectionRefusal
//!
//! # Data Flow
//!
//! 1. A snapshot arrives (poller or explicit refresh)
//! 2. A click passes the turn gate and selects a piece
//! 3. `rules::legal_moves` computes its destinations
//! 4. A second click on a destination submits the move
//! 5. The refreshed snapshot drives the check banner

pub mod components;
pub mod error;
pub mod resources;
pub mod rules;
pub mod session;
pub mod types;

pub use session::BoardSession;
