pub mod core;
pub mod game;
pub mod networking;

pub use game::components::{GameSnapshot, Piece, PieceColor, PieceType, Square};
pub use game::error::{GameError, GameResult};
pub use game::rules::{in_check, legal_moves, simulate, PieceSet};
pub use game::types::{CommittedMove, Move};
