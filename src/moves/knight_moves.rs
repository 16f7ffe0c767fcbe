//! Knight movement rule.

use crate::game_state::chess_types::BoardLocation;

/// Tests the knight displacement rule: (1, 2) or (2, 1) in any direction.
/// Knights jump, so there is no path-clearance requirement.
#[inline]
pub fn knight_move_is_valid(from: BoardLocation, to: BoardLocation) -> bool {
    let d_file = (to.0 - from.0).abs();
    let d_rank = (to.1 - from.1).abs();
    (d_file == 2 && d_rank == 1) || (d_file == 1 && d_rank == 2)
}
