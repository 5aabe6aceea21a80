//! Test suite for chess move validation and check detection
//!
//! Tests all piece movement rules, path clearance, simulation and check
//! detection using pure functions over hand-built piece sets.
//!
//! # Test Organization
//!
//! - `test_board_state_*` - PieceSet query operations and path clearance
//! - `test_pawn_*` - Pawn movement (forward, double-move, capture)
//! - `test_knight_*` - Knight L-shaped movement
//! - `test_bishop_*` / `test_rook_*` / `test_queen_*` - Sliding pieces
//! - `test_king_*` - King single-square movement
//! - `test_check_*` - Attack detection against the king
//! - `test_legal_*` - Legal move generation with self-check filtering
//!
//! Orientation: White pawns advance toward row 0, Black pawns toward row 7.

use super::*;
use crate::game::components::{Piece, PieceColor, PieceType, Square};
use crate::game::types::Move;

/// Helper function to create a test piece set from piece definitions
///
/// Takes a list of (piece_type, color, (row, col)) tuples. Every piece starts
/// with `has_moved = false`.
///
/// # Example
/// ```rust,ignore
/// let board = create_test_board(&[
///     (PieceType::Pawn, PieceColor::White, (6, 4)),
///     (PieceType::Rook, PieceColor::Black, (0, 4)),
/// ]);
/// ```
fn create_test_board(pieces: &[(PieceType, PieceColor, (u8, u8))]) -> PieceSet {
    pieces
        .iter()
        .map(|&(piece_type, color, (row, col))| Piece::new(piece_type, color, row, col))
        .collect()
}

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn piece_on(board: &PieceSet, row: u8, col: u8) -> Piece {
    *board
        .piece_at(sq(row, col))
        .unwrap_or_else(|| panic!("test board has no piece on ({row}, {col})"))
}

// ============================================================================
// Board State Tests
// ============================================================================

#[test]
fn test_board_state_is_empty() {
    //! Verifies that PieceSet correctly identifies empty squares
    let board = create_test_board(&[(PieceType::Pawn, PieceColor::White, (3, 3))]);

    assert!(board.is_empty(sq(2, 2)), "Adjacent square should be empty");
    assert!(!board.is_empty(sq(3, 3)), "Square with piece should not be empty");
    assert!(board.is_empty(sq(7, 7)), "Far corner should be empty");
}

#[test]
fn test_board_state_color_at() {
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (6, 0)),
        (PieceType::Pawn, PieceColor::Black, (1, 0)),
    ]);

    assert_eq!(board.color_at(sq(6, 0)), Some(PieceColor::White));
    assert_eq!(board.color_at(sq(1, 0)), Some(PieceColor::Black));
    assert_eq!(board.color_at(sq(3, 3)), None, "Empty square should return None");
}

#[test]
fn test_board_state_duplicate_square_returns_first() {
    //! Two pieces on one square violate the snapshot invariant. Lookups
    //! degrade to the first listed piece instead of failing.
    let board = create_test_board(&[
        (PieceType::Knight, PieceColor::White, (4, 4)),
        (PieceType::Bishop, PieceColor::Black, (4, 4)),
    ]);

    assert_eq!(piece_on(&board, 4, 4).piece_type, PieceType::Knight);
}

#[test]
fn test_board_state_standard_layout() {
    let board = PieceSet::standard();

    assert_eq!(board.len(), 32);
    assert_eq!(board.find_king(PieceColor::White), Some(sq(7, 4)));
    assert_eq!(board.find_king(PieceColor::Black), Some(sq(0, 4)));
    assert_eq!(piece_on(&board, 7, 3).piece_type, PieceType::Queen);
    assert_eq!(piece_on(&board, 1, 5).piece_type, PieceType::Pawn);
    assert_eq!(board.pieces_of(PieceColor::White).count(), 16);
}

#[test]
fn test_board_state_path_clear_and_blocked() {
    //! Path clearance excludes both endpoints, so an occupied destination
    //! does not block its own corridor.
    let board = create_test_board(&[
        (PieceType::Rook, PieceColor::White, (4, 0)),
        (PieceType::Pawn, PieceColor::Black, (4, 5)),
        (PieceType::Pawn, PieceColor::Black, (2, 2)),
    ]);

    assert!(board.is_path_clear(sq(4, 0), sq(4, 5)), "Endpoints are not part of the path");
    assert!(!board.is_path_clear(sq(4, 0), sq(4, 7)), "Pawn on (4,5) blocks the row");
    assert!(!board.is_path_clear(sq(0, 0), sq(4, 4)), "Pawn on (2,2) blocks the diagonal");
    assert!(board.is_path_clear(sq(0, 7), sq(7, 0)), "Anti-diagonal is open");
}

#[test]
fn test_board_state_path_symmetric() {
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (3, 3)),
        (PieceType::Pawn, PieceColor::Black, (5, 1)),
    ]);

    for a in Square::all() {
        for b in Square::all() {
            assert_eq!(
                board.is_path_clear(a, b),
                board.is_path_clear(b, a),
                "Path clearance must not depend on direction: {a} vs {b}"
            );
        }
    }
}

#[test]
fn test_board_state_path_not_a_line() {
    //! A knight-shaped pair has no corridor; the scan must terminate
    let board = PieceSet::default();
    assert!(!board.is_path_clear(sq(0, 0), sq(2, 1)));
    assert!(board.is_path_clear(sq(3, 3), sq(3, 3)));
}

// ============================================================================
// Pawn Movement Tests
// ============================================================================

#[test]
fn test_pawn_single_forward_move() {
    //! White pawns advance toward row 0, black pawns toward row 7
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (6, 4)),
        (PieceType::Pawn, PieceColor::Black, (1, 4)),
    ]);

    assert!(
        can_move_to(&piece_on(&board, 6, 4), sq(5, 4), &board),
        "White pawn should move forward one square"
    );
    assert!(
        can_move_to(&piece_on(&board, 1, 4), sq(2, 4), &board),
        "Black pawn should move forward one square"
    );
    assert!(
        !can_move_to(&piece_on(&board, 6, 4), sq(7, 4), &board),
        "Pawns never move backwards"
    );
}

#[test]
fn test_pawn_double_forward_from_start() {
    //! Pawns can move two squares forward while `has_moved` is false, with
    //! both the intermediate and destination squares empty.
    let board = create_test_board(&[(PieceType::Pawn, PieceColor::White, (6, 3))]);
    let pawn = piece_on(&board, 6, 3);

    assert!(can_move_to(&pawn, sq(4, 3), &board), "Unmoved pawn may double-step");
    assert!(
        !can_move_to(&pawn.moved(true), sq(4, 3), &board),
        "Pawn should not double-move after already moving (has_moved=true)"
    );
}

#[test]
fn test_pawn_double_forward_blocked_halfway() {
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::Black, (1, 6)),
        (PieceType::Knight, PieceColor::White, (2, 6)),
    ]);

    assert!(
        !can_move_to(&piece_on(&board, 1, 6), sq(3, 6), &board),
        "Double step cannot jump over the intermediate square"
    );
}

#[test]
fn test_pawn_blocked_by_piece() {
    //! Straight pawn moves never capture, whatever the color in front
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (6, 2)),
        (PieceType::Pawn, PieceColor::Black, (5, 2)),
    ]);

    assert!(
        !can_move_to(&piece_on(&board, 6, 2), sq(5, 2), &board),
        "Pawn should not move forward into occupied square"
    );
}

#[test]
fn test_pawn_diagonal_capture() {
    //! Pawns may only step diagonally onto an enemy piece
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (4, 3)),
        (PieceType::Pawn, PieceColor::Black, (3, 4)),
    ]);
    let pawn = piece_on(&board, 4, 3);

    assert!(can_move_to(&pawn, sq(3, 4), &board), "White pawn should capture diagonally");
    assert!(
        !can_move_to(&pawn, sq(3, 2), &board),
        "Pawn should not move diagonally to empty square"
    );
    assert!(
        !can_move_to(&pawn, sq(5, 4), &board),
        "Pawn should not capture backwards"
    );
}

#[test]
fn test_pawn_cannot_capture_own_color() {
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (4, 3)),
        (PieceType::Rook, PieceColor::White, (3, 4)),
    ]);

    assert!(
        !can_move_to(&piece_on(&board, 4, 3), sq(3, 4), &board),
        "Pawn should not capture own piece"
    );
}

#[test]
fn test_pawn_attacks_diagonal_only() {
    //! A pawn threatens its forward diagonals even when they are empty, and
    //! never the square straight ahead.
    let board = create_test_board(&[(PieceType::Pawn, PieceColor::Black, (2, 2))]);
    let pawn = piece_on(&board, 2, 2);

    assert!(attacks(&pawn, sq(3, 1), &board));
    assert!(attacks(&pawn, sq(3, 3), &board));
    assert!(!attacks(&pawn, sq(3, 2), &board));
    assert!(!attacks(&pawn, sq(1, 1), &board), "Black pawns attack toward row 7");
}

// ============================================================================
// Knight Movement Tests
// ============================================================================

#[test]
fn test_knight_l_shaped_movement() {
    let board = create_test_board(&[(PieceType::Knight, PieceColor::White, (4, 4))]);
    let knight = piece_on(&board, 4, 4);

    let destinations = pseudo_legal_destinations(&knight, &board);
    assert_eq!(destinations.len(), 8, "Centralized knight has 8 destinations");
    for to in destinations {
        let (d_row, d_col) = knight.square().delta_to(to);
        let shape = (d_row.abs(), d_col.abs());
        assert!(shape == (2, 1) || shape == (1, 2), "Knight move must be an L: {to}");
    }
}

#[test]
fn test_knight_can_jump_over_pieces() {
    let board = create_test_board(&[
        (PieceType::Knight, PieceColor::White, (7, 1)),
        (PieceType::Pawn, PieceColor::White, (6, 0)),
        (PieceType::Pawn, PieceColor::White, (6, 1)),
        (PieceType::Pawn, PieceColor::White, (6, 2)),
    ]);

    assert!(can_move_to(&piece_on(&board, 7, 1), sq(5, 2), &board));
    assert!(can_move_to(&piece_on(&board, 7, 1), sq(5, 0), &board));
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_bishop_diagonal_movement() {
    let board = create_test_board(&[(PieceType::Bishop, PieceColor::Black, (3, 3))]);
    let bishop = piece_on(&board, 3, 3);

    assert!(can_move_to(&bishop, sq(0, 0), &board));
    assert!(can_move_to(&bishop, sq(7, 7), &board));
    assert!(can_move_to(&bishop, sq(0, 6), &board));
    assert!(!can_move_to(&bishop, sq(3, 6), &board), "Bishop cannot move straight");
    assert_eq!(pseudo_legal_destinations(&bishop, &board).len(), 13);
}

#[test]
fn test_bishop_blocked_by_piece() {
    let board = create_test_board(&[
        (PieceType::Bishop, PieceColor::White, (7, 2)),
        (PieceType::Pawn, PieceColor::Black, (5, 4)),
    ]);
    let bishop = piece_on(&board, 7, 2);

    assert!(can_move_to(&bishop, sq(5, 4), &board), "Bishop may capture the blocker");
    assert!(!can_move_to(&bishop, sq(4, 5), &board), "Bishop cannot pass the blocker");
}

#[test]
fn test_rook_horizontal_vertical_movement() {
    let board = create_test_board(&[(PieceType::Rook, PieceColor::White, (0, 0))]);
    let rook = piece_on(&board, 0, 0);

    assert!(can_move_to(&rook, sq(0, 7), &board));
    assert!(can_move_to(&rook, sq(7, 0), &board));
    assert!(!can_move_to(&rook, sq(1, 1), &board), "Rook cannot move diagonally");
    assert_eq!(pseudo_legal_destinations(&rook, &board).len(), 14);
}

#[test]
fn test_rook_blocked_by_piece() {
    let board = create_test_board(&[
        (PieceType::Rook, PieceColor::White, (7, 0)),
        (PieceType::Pawn, PieceColor::White, (4, 0)),
    ]);
    let rook = piece_on(&board, 7, 0);

    assert!(can_move_to(&rook, sq(5, 0), &board));
    assert!(!can_move_to(&rook, sq(4, 0), &board), "Rook cannot capture own pawn");
    assert!(!can_move_to(&rook, sq(2, 0), &board), "Rook cannot pass own pawn");
}

#[test]
fn test_queen_combined_movement() {
    let board = create_test_board(&[(PieceType::Queen, PieceColor::Black, (4, 3))]);
    let queen = piece_on(&board, 4, 3);

    assert!(can_move_to(&queen, sq(4, 7), &board), "Queen moves like a rook");
    assert!(can_move_to(&queen, sq(1, 0), &board), "Queen moves like a bishop");
    assert!(!can_move_to(&queen, sq(2, 4), &board), "Queen cannot move like a knight");
    assert_eq!(pseudo_legal_destinations(&queen, &board).len(), 27);
}

// ============================================================================
// King Movement Tests
// ============================================================================

#[test]
fn test_king_single_square_movement() {
    let board = create_test_board(&[(PieceType::King, PieceColor::White, (7, 4))]);
    let king = piece_on(&board, 7, 4);

    assert!(can_move_to(&king, sq(6, 4), &board));
    assert!(can_move_to(&king, sq(7, 5), &board));
    assert!(!can_move_to(&king, sq(5, 4), &board), "King moves one square only");
    assert!(!can_move_to(&king, sq(7, 6), &board), "Castling is not modelled");
}

#[test]
fn test_no_move_off_board_or_in_place() {
    let board = create_test_board(&[(PieceType::Queen, PieceColor::White, (0, 0))]);
    let queen = piece_on(&board, 0, 0);

    assert!(!can_move_to(&queen, sq(0, 0), &board));
    assert!(!can_move_to(&queen, sq(0, 8), &board));
    assert!(!can_move_to(&queen, sq(9, 9), &board));
}

// ============================================================================
// Check Detection Tests
// ============================================================================

#[test]
fn test_check_rook_on_open_row() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::White, (4, 4)),
        (PieceType::Rook, PieceColor::Black, (4, 0)),
    ]);

    assert!(in_check(&board, PieceColor::White));
    assert_eq!(checkers(&board, PieceColor::White), vec![sq(4, 0)]);
}

#[test]
fn test_check_rook_blocked() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::White, (4, 4)),
        (PieceType::Rook, PieceColor::Black, (4, 0)),
        (PieceType::Pawn, PieceColor::White, (4, 2)),
    ]);

    assert!(!in_check(&board, PieceColor::White));
    assert!(checkers(&board, PieceColor::White).is_empty());
}

#[test]
fn test_check_knight() {
    let board = create_test_board(&[
        (PieceType::Knight, PieceColor::White, (0, 1)),
        (PieceType::King, PieceColor::Black, (2, 2)),
    ]);

    assert!(in_check(&board, PieceColor::Black));
    assert!(!in_check(&board, PieceColor::White), "Missing king is never in check");
}

#[test]
fn test_check_pawn_direction() {
    //! A White pawn on (5,3) attacks (4,2) and (4,4), not (6,2)
    let attacked = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (5, 3)),
        (PieceType::King, PieceColor::Black, (4, 4)),
    ]);
    let behind = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (5, 3)),
        (PieceType::King, PieceColor::Black, (6, 2)),
    ]);
    let ahead = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (5, 3)),
        (PieceType::King, PieceColor::Black, (4, 3)),
    ]);

    assert!(in_check(&attacked, PieceColor::Black));
    assert!(!in_check(&behind, PieceColor::Black));
    assert!(!in_check(&ahead, PieceColor::Black), "Pawns never attack straight ahead");
}

#[test]
fn test_check_double_check() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::Black, (0, 4)),
        (PieceType::Queen, PieceColor::White, (3, 1)),
        (PieceType::Knight, PieceColor::White, (2, 5)),
        (PieceType::Bishop, PieceColor::White, (7, 7)),
    ]);

    let mut found = checkers(&board, PieceColor::Black);
    found.sort();
    assert_eq!(found, vec![sq(2, 5), sq(3, 1)]);
}

#[test]
fn test_check_own_pieces_ignored() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::White, (7, 4)),
        (PieceType::Queen, PieceColor::White, (7, 3)),
    ]);

    assert!(!in_check(&board, PieceColor::White));
}

#[test]
fn test_check_standard_position() {
    let board = PieceSet::standard();
    assert!(!in_check(&board, PieceColor::White));
    assert!(!in_check(&board, PieceColor::Black));
}

// ============================================================================
// Legal Move Generation Tests
// ============================================================================

#[test]
fn test_legal_pawn_double_step_open() {
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (6, 3)),
        (PieceType::King, PieceColor::White, (7, 4)),
        (PieceType::King, PieceColor::Black, (0, 4)),
    ]);

    assert_eq!(legal_moves(&board, sq(6, 3)), vec![sq(4, 3), sq(5, 3)]);
}

#[test]
fn test_legal_pawn_double_step_onto_enemy() {
    //! Straight pawn moves never capture, so an enemy on the double-step
    //! square removes that destination.
    let board = create_test_board(&[
        (PieceType::Pawn, PieceColor::White, (6, 3)),
        (PieceType::Knight, PieceColor::Black, (4, 3)),
    ]);

    assert_eq!(legal_moves(&board, sq(6, 3)), vec![sq(5, 3)]);
}

#[test]
fn test_legal_empty_square() {
    let board = PieceSet::standard();
    assert!(legal_moves(&board, sq(4, 4)).is_empty());
    assert!(legal_moves(&board, sq(12, 40)).is_empty());
}

#[test]
fn test_legal_pinned_piece() {
    //! A bishop pinned on the king's file may not leave it
    let board = create_test_board(&[
        (PieceType::King, PieceColor::White, (7, 4)),
        (PieceType::Bishop, PieceColor::White, (6, 4)),
        (PieceType::Rook, PieceColor::Black, (0, 4)),
    ]);

    assert!(legal_moves(&board, sq(6, 4)).is_empty());
}

#[test]
fn test_legal_pinned_rook_slides_along_pin() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::White, (7, 4)),
        (PieceType::Rook, PieceColor::White, (5, 4)),
        (PieceType::Rook, PieceColor::Black, (0, 4)),
    ]);

    let moves = legal_moves(&board, sq(5, 4));
    assert_eq!(moves, vec![sq(0, 4), sq(1, 4), sq(2, 4), sq(3, 4), sq(4, 4), sq(6, 4)]);
}

#[test]
fn test_legal_king_avoids_attacked_squares() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::White, (7, 4)),
        (PieceType::Rook, PieceColor::Black, (6, 0)),
    ]);

    let moves = legal_moves(&board, sq(7, 4));
    assert_eq!(moves, vec![sq(7, 3), sq(7, 5)]);
}

#[test]
fn test_legal_must_resolve_check() {
    //! In check, only moves that block or capture the checker survive
    let board = create_test_board(&[
        (PieceType::King, PieceColor::White, (7, 4)),
        (PieceType::Rook, PieceColor::White, (5, 0)),
        (PieceType::Queen, PieceColor::Black, (3, 4)),
        (PieceType::King, PieceColor::Black, (0, 0)),
    ]);

    assert!(in_check(&board, PieceColor::White));
    assert_eq!(legal_moves(&board, sq(5, 0)), vec![sq(5, 4)]);
}

#[test]
fn test_legal_king_can_capture_unprotected_attacker() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::Black, (0, 4)),
        (PieceType::Queen, PieceColor::White, (1, 4)),
    ]);

    assert_eq!(legal_moves(&board, sq(0, 4)), vec![sq(1, 4)]);
}

#[test]
fn test_legal_without_king_only_patterns_apply() {
    //! With no king of the mover's color, nothing can be self-check
    let board = create_test_board(&[(PieceType::Rook, PieceColor::White, (0, 0))]);
    assert_eq!(legal_moves(&board, sq(0, 0)).len(), 14);
}

#[test]
fn test_legal_standard_opening_counts() {
    let board = PieceSet::standard();

    assert_eq!(legal_moves(&board, sq(7, 1)), vec![sq(5, 0), sq(5, 2)]);
    assert!(legal_moves(&board, sq(7, 0)).is_empty(), "Rook is boxed in");
    assert_eq!(legal_moves_for(&board, PieceColor::White).len(), 20);
    assert_eq!(legal_moves_for(&board, PieceColor::Black).len(), 20);
}

#[test]
fn test_is_legal_move_matches_generator() {
    let board = create_test_board(&[
        (PieceType::King, PieceColor::White, (7, 4)),
        (PieceType::Bishop, PieceColor::White, (6, 4)),
        (PieceType::Rook, PieceColor::Black, (0, 4)),
        (PieceType::Knight, PieceColor::White, (7, 1)),
    ]);

    assert!(!is_legal_move(&board, Move::new(sq(6, 4), sq(5, 3))));
    assert!(is_legal_move(&board, Move::new(sq(7, 1), sq(5, 2))));
    assert!(!is_legal_move(&board, Move::new(sq(3, 3), sq(2, 3))));
}
