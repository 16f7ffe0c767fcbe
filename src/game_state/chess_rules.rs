//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the home squares that castling-rights updates
//! key off.

use crate::game_state::chess_types::{BoardLocation, Color};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Rank a pawn of the given color starts on (and may double-step from).
#[inline]
pub const fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// Rank on which a pawn of the given color promotes.
#[inline]
pub const fn pawn_promotion_rank(color: Color) -> i8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Back rank of the given color, where its king and rooks start.
#[inline]
pub const fn back_rank(color: Color) -> i8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Home square of the kingside (file 7) or queenside (file 0) rook.
#[inline]
pub const fn rook_home_square(color: Color, kingside: bool) -> BoardLocation {
    let file = if kingside { 7 } else { 0 };
    (file, back_rank(color))
}
