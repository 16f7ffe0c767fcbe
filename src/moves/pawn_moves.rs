//! Pawn movement and attack rules.
//!
//! Pawns are the one piece whose move pattern and attack pattern differ: the
//! forward push never captures, and the diagonal step never moves without a
//! capture (ordinary or en passant). The two predicates are kept separate so
//! the attack detector cannot accidentally treat a blocked push as a threat.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::chess_types::{BoardLocation, Color};

/// Tests the pawn movement rule: single push onto an empty square, double
/// push from the home rank through an empty intermediate square, or a
/// one-square diagonal capture (including onto the en-passant target).
pub fn pawn_move_is_valid(
    board: &Board,
    en_passant_square: Option<BoardLocation>,
    color: Color,
    from: BoardLocation,
    to: BoardLocation,
) -> bool {
    let forward = color.forward_direction();
    let d_rank = to.1 - from.1;
    let d_file = (to.0 - from.0).abs();

    if d_file == 0 {
        if board.view(to).is_some() {
            return false;
        }
        if d_rank == forward {
            return true;
        }
        // Double step: home rank only, and the square stepped over must be
        // empty as well.
        from.1 == pawn_home_rank(color)
            && d_rank == 2 * forward
            && board.view((from.0, from.1 + forward)).is_none()
    } else if d_file == 1 && d_rank == forward {
        match board.view(to) {
            Some(target) => target.color != color,
            None => en_passant_square == Some(to),
        }
    } else {
        false
    }
}

/// Tests the pawn *attack* pattern: one square diagonally forward,
/// regardless of what occupies the target. Forward pushes never attack.
#[inline]
pub fn pawn_attacks_square(color: Color, from: BoardLocation, to: BoardLocation) -> bool {
    to.1 - from.1 == color.forward_direction() && (to.0 - from.0).abs() == 1
}
