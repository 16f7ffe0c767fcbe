//! King single-step rule.
//!
//! Only the one-square step lives here. The two-file castling displacement is
//! validated by `move_generation::legal_move_generator::can_castle`, and the
//! attack detector deliberately uses the single-step rule alone: a king is
//! never a castling threat.

use crate::game_state::chess_types::BoardLocation;

/// Tests the king step rule: at most one square along each axis.
#[inline]
pub fn king_step_is_valid(from: BoardLocation, to: BoardLocation) -> bool {
    (to.0 - from.0).abs() <= 1 && (to.1 - from.1).abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::king_step_is_valid;

    #[test]
    fn king_steps_one_square_in_any_direction() {
        let from = (4, 0);
        for to in [(3, 0), (5, 0), (3, 1), (4, 1), (5, 1)] {
            assert!(king_step_is_valid(from, to), "expected {from:?} -> {to:?}");
        }
        assert!(!king_step_is_valid(from, (6, 0)));
        assert!(!king_step_is_valid(from, (2, 0)));
        assert!(!king_step_is_valid(from, (4, 2)));
    }
}
