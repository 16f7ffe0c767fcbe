//! Attack and check detection.
//!
//! `is_square_attacked` tests reachability of a square by any piece of one
//! side using *attack* patterns, which differ from move legality in two
//! deliberate ways: pawn forward pushes never attack (only the diagonals
//! do), and the king contributes its single-step pattern only, so castling
//! can never appear as a threat and attack detection never recurses into
//! castling legality. Capture filtering ("destination must hold an enemy")
//! is also absent, since the square under test is arbitrary.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, Color, PieceKind};
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::king_moves::king_step_is_valid;
use crate::moves::knight_moves::knight_move_is_valid;
use crate::moves::pawn_moves::pawn_attacks_square;
use crate::moves::queen_moves::queen_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

/// Locates the king of the given color, if present.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<BoardLocation> {
    board.king_square(color)
}

/// Tests whether any piece of `attacker_color` attacks `square` on the given
/// board.
pub fn is_square_attacked(board: &Board, square: BoardLocation, attacker_color: Color) -> bool {
    board.iter_pieces().any(|(from, piece)| {
        if piece.color != attacker_color {
            return false;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_attacks_square(attacker_color, from, square),
            PieceKind::Knight => knight_move_is_valid(from, square),
            PieceKind::Bishop => bishop_move_is_valid(board, from, square),
            PieceKind::Rook => rook_move_is_valid(board, from, square),
            PieceKind::Queen => queen_move_is_valid(board, from, square),
            PieceKind::King => king_step_is_valid(from, square),
        }
    })
}

/// Tests whether the king of `color` is attacked by the other side. A board
/// with no king of `color` is reported as not in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match king_square(board, color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn place(board: &mut Board, file: i8, rank: i8, color: Color, kind: PieceKind) {
        board.place((file, rank), Piece { color, kind });
    }

    #[test]
    fn rook_attacks_along_open_lines_only() {
        let mut board = Board::empty();
        place(&mut board, 0, 0, Color::Dark, PieceKind::Rook);

        assert!(is_square_attacked(&board, (0, 7), Color::Dark));
        assert!(is_square_attacked(&board, (7, 0), Color::Dark));
        assert!(!is_square_attacked(&board, (1, 1), Color::Dark));

        place(&mut board, 0, 4, Color::Light, PieceKind::Pawn);
        assert!(!is_square_attacked(&board, (0, 7), Color::Dark));
        // The blocker's own square is still attacked.
        assert!(is_square_attacked(&board, (0, 4), Color::Dark));
    }

    #[test]
    fn pawn_attacks_diagonals_but_not_its_push_square() {
        let mut board = Board::empty();
        place(&mut board, 4, 4, Color::Light, PieceKind::Pawn);

        assert!(is_square_attacked(&board, (3, 5), Color::Light));
        assert!(is_square_attacked(&board, (5, 5), Color::Light));
        assert!(!is_square_attacked(&board, (4, 5), Color::Light));
    }

    #[test]
    fn king_attack_range_is_one_square() {
        let mut board = Board::empty();
        place(&mut board, 4, 0, Color::Light, PieceKind::King);

        assert!(is_square_attacked(&board, (5, 1), Color::Light));
        assert!(!is_square_attacked(&board, (6, 0), Color::Light));
    }

    #[test]
    fn check_detection_requires_a_king_on_the_board() {
        let mut board = Board::empty();
        place(&mut board, 0, 7, Color::Dark, PieceKind::Rook);
        assert!(!is_king_in_check(&board, Color::Light));

        place(&mut board, 0, 0, Color::Light, PieceKind::King);
        assert!(is_king_in_check(&board, Color::Light));

        place(&mut board, 0, 3, Color::Dark, PieceKind::Knight);
        // The knight blocks its own rook's file and gives no check itself.
        assert!(!is_king_in_check(&board, Color::Light));
    }
}
