//! Snapshot data types
//!
//! Pure data structures with no rules logic: pieces and squares, and the
//! game snapshot that carries them.

pub mod piece;
pub mod game_state;

// Re-export all components for convenience
pub use game_state::*;
pub use piece::*;
