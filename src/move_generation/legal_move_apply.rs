//! Move execution.
//!
//! `apply_move` assumes the move has already been validated by
//! `legal_move_generator::is_legal_move` and does not re-validate. It derives
//! a complete successor state from the current one, so a caller never
//! observes a half-applied move: either the new aggregate replaces the old
//! one wholesale or nothing happened.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{pawn_promotion_rank, rook_home_square};
use crate::game_state::chess_types::{
    BoardLocation, Color, Piece, PieceKind, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::game_state::GameState;

/// Applies a validated move, returning the successor state. The only error
/// case is a contract violation: an empty origin square.
pub fn apply_move(
    game_state: &GameState,
    from: BoardLocation,
    to: BoardLocation,
) -> ChessResult<GameState> {
    let piece = game_state
        .board
        .view(from)
        .ok_or(ChessErrors::NoPieceAtSquare(from))?;
    let color = piece.color;

    let mut next = game_state.clone();

    // Castling: a king moving two files drags its rook to the far side.
    if piece.kind == PieceKind::King && (to.0 - from.0).abs() == 2 {
        let kingside = to.0 > from.0;
        let rook_from = rook_home_square(color, kingside);
        let rook_to = (if kingside { 5 } else { 3 }, from.1);
        next.board.relocate(rook_from, rook_to);
    }

    // En passant: the captured pawn sits on the destination file but the
    // origin rank.
    if piece.kind == PieceKind::Pawn && game_state.en_passant_square == Some(to) {
        next.board.remove((to.0, from.1));
    }

    // A double step exposes the square directly behind the pawn for exactly
    // one ply; every other move clears the target.
    next.en_passant_square = if piece.kind == PieceKind::Pawn && (to.1 - from.1).abs() == 2 {
        Some((from.0, (from.1 + to.1) / 2))
    } else {
        None
    };

    update_castling_rights(&mut next, color, piece.kind, from, to);

    next.board.relocate(from, to);

    // Auto-queen on the far rank; no under-promotion is offered.
    if piece.kind == PieceKind::Pawn && to.1 == pawn_promotion_rank(color) {
        next.board.place(
            to,
            Piece {
                color,
                kind: PieceKind::Queen,
            },
        );
    }

    next.side_to_move = color.opposite();

    Ok(next)
}

/// Clears castling rights invalidated by this move. Rights are monotone:
/// once cleared they never return.
fn update_castling_rights(
    game_state: &mut GameState,
    moving_color: Color,
    moved_kind: PieceKind,
    from: BoardLocation,
    to: BoardLocation,
) {
    if moved_kind == PieceKind::King {
        game_state.castling_rights &= match moving_color {
            Color::Light => !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE),
            Color::Dark => !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE),
        };
    }

    if moved_kind == PieceKind::Rook {
        if from == rook_home_square(moving_color, false) {
            game_state.castling_rights &= match moving_color {
                Color::Light => !CASTLE_LIGHT_QUEENSIDE,
                Color::Dark => !CASTLE_DARK_QUEENSIDE,
            };
        }
        if from == rook_home_square(moving_color, true) {
            game_state.castling_rights &= match moving_color {
                Color::Light => !CASTLE_LIGHT_KINGSIDE,
                Color::Dark => !CASTLE_DARK_KINGSIDE,
            };
        }
    }

    // Landing on a rook home square captures any unmoved rook there, which
    // invalidates the defender's right on that side.
    match to {
        (0, 0) => game_state.castling_rights &= !CASTLE_LIGHT_QUEENSIDE,
        (7, 0) => game_state.castling_rights &= !CASTLE_LIGHT_KINGSIDE,
        (0, 7) => game_state.castling_rights &= !CASTLE_DARK_QUEENSIDE,
        (7, 7) => game_state.castling_rights &= !CASTLE_DARK_KINGSIDE,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{
        Color, PieceKind, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE,
        CASTLE_LIGHT_QUEENSIDE,
    };
    use crate::game_state::game_state::GameState;

    #[test]
    fn empty_origin_is_a_contract_violation() {
        let game = GameState::new_game();
        assert_eq!(
            apply_move(&game, (4, 3), (4, 4)).unwrap_err(),
            ChessErrors::NoPieceAtSquare((4, 3))
        );
    }

    #[test]
    fn double_step_sets_en_passant_target_for_one_ply() {
        let game = GameState::new_game();
        let after = apply_move(&game, (4, 1), (4, 3)).expect("pawn double step applies");
        assert_eq!(after.en_passant_square, Some((4, 2)));
        assert_eq!(after.side_to_move, Color::Dark);

        let after_reply = apply_move(&after, (4, 6), (4, 5)).expect("reply applies");
        assert_eq!(after_reply.en_passant_square, None);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        // Light pawn e5, dark pawn d7 double-steps to d5, exd6 e.p.
        let mut game = GameState::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1")
            .expect("position parses");
        game = apply_move(&game, (3, 6), (3, 4)).expect("double step applies");
        assert_eq!(game.en_passant_square, Some((3, 5)));

        let after = apply_move(&game, (4, 4), (3, 5)).expect("en passant applies");
        assert_eq!(after.board.view((3, 4)), None, "captured pawn removed");
        assert_eq!(
            after.board.view((3, 5)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn kingside_castling_relocates_the_rook_and_clears_rights() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("position parses");
        let after = apply_move(&game, (4, 0), (6, 0)).expect("castling applies");

        assert_eq!(after.board.view((6, 0)).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(after.board.view((5, 0)).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(after.board.view((7, 0)), None);
        assert_eq!(after.castling_rights & CASTLE_LIGHT_KINGSIDE, 0);
        assert_eq!(after.castling_rights & CASTLE_LIGHT_QUEENSIDE, 0);
        assert_ne!(after.castling_rights & CASTLE_DARK_KINGSIDE, 0);
    }

    #[test]
    fn rook_moves_clear_only_their_own_side() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("position parses");
        let after = apply_move(&game, (0, 0), (0, 4)).expect("rook move applies");
        assert_eq!(after.castling_rights & CASTLE_LIGHT_QUEENSIDE, 0);
        assert_ne!(after.castling_rights & CASTLE_LIGHT_KINGSIDE, 0);
    }

    #[test]
    fn capturing_an_unmoved_rook_clears_the_defenders_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("position parses");
        let after = apply_move(&game, (0, 0), (0, 7)).expect("rook capture applies");
        assert_eq!(after.castling_rights & CASTLE_DARK_QUEENSIDE, 0);
        assert_ne!(after.castling_rights & CASTLE_DARK_KINGSIDE, 0);
    }

    #[test]
    fn pawn_reaching_the_far_rank_becomes_a_queen() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("position parses");
        let after = apply_move(&game, (0, 6), (0, 7)).expect("promotion applies");

        let promoted = after.board.view((0, 7)).expect("square occupied");
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color, Color::Light);
    }

    #[test]
    fn captures_are_not_reversible() {
        // Moving the capturing rook back does not restore the captured pawn.
        let game = GameState::from_fen("4k3/8/8/8/8/8/r7/R3K3 b - - 0 1")
            .expect("position parses");
        let captured = apply_move(&game, (0, 1), (0, 0)).expect("capture applies");
        let reversed = apply_move(&captured, (0, 0), (0, 1)).expect("retreat applies");
        assert_eq!(reversed.board.view((0, 0)), None);
        assert_eq!(
            reversed.board.view((0, 1)).map(|p| (p.color, p.kind)),
            Some((Color::Dark, PieceKind::Rook))
        );
    }
}
