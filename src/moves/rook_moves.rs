//! Rook movement rule.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;

/// Tests the rook rule: same file or same rank, with every square strictly
/// between origin and destination empty.
#[inline]
pub fn rook_move_is_valid(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    if from.0 != to.0 && from.1 != to.1 {
        return false;
    }
    board.path_is_clear(from, to)
}

#[cfg(test)]
mod tests {
    use super::rook_move_is_valid;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn rook_slides_along_ranks_and_files() {
        let board = Board::empty();
        assert!(rook_move_is_valid(&board, (0, 0), (0, 7)));
        assert!(rook_move_is_valid(&board, (0, 0), (7, 0)));
        assert!(!rook_move_is_valid(&board, (0, 0), (1, 1)));
        assert!(!rook_move_is_valid(&board, (0, 0), (2, 1)));
    }

    #[test]
    fn rook_is_blocked_by_intervening_pieces() {
        let mut board = Board::empty();
        board.place(
            (0, 3),
            Piece {
                color: Color::Dark,
                kind: PieceKind::Pawn,
            },
        );
        assert!(!rook_move_is_valid(&board, (0, 0), (0, 7)));
        // The blocker itself is a reachable destination.
        assert!(rook_move_is_valid(&board, (0, 0), (0, 3)));
    }
}
