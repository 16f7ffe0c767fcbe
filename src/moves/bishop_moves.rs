//! Bishop movement rule.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;

/// Tests the bishop rule: equal absolute file and rank displacement, with
/// every square strictly between origin and destination empty.
#[inline]
pub fn bishop_move_is_valid(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    if (to.0 - from.0).abs() != (to.1 - from.1).abs() {
        return false;
    }
    board.path_is_clear(from, to)
}
