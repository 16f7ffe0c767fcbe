//! Queen movement rule: the union of the rook and bishop rules.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

#[inline]
pub fn queen_move_is_valid(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    rook_move_is_valid(board, from, to) || bishop_move_is_valid(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::queen_move_is_valid;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let board = Board::empty();
        assert!(queen_move_is_valid(&board, (3, 3), (3, 7)));
        assert!(queen_move_is_valid(&board, (3, 3), (7, 3)));
        assert!(queen_move_is_valid(&board, (3, 3), (6, 6)));
        assert!(queen_move_is_valid(&board, (3, 3), (0, 6)));
        assert!(!queen_move_is_valid(&board, (3, 3), (4, 5)));
    }

    #[test]
    fn queen_is_blocked_on_both_line_kinds() {
        let mut board = Board::empty();
        let pawn = Piece {
            color: Color::Dark,
            kind: PieceKind::Pawn,
        };
        board.place((3, 5), pawn);
        board.place((5, 5), pawn);
        assert!(!queen_move_is_valid(&board, (3, 3), (3, 7)));
        assert!(!queen_move_is_valid(&board, (3, 3), (6, 6)));
    }
}
