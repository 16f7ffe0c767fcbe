//! Move legality, castling legality, and game-end detection.
//!
//! `is_legal_move` is a pure predicate: occupancy and turn check, no
//! self-capture, the per-kind shape/path rule, then a king-safety simulation
//! on a board copy. The simulation relocates only the moving piece; special
//! side effects (en-passant removal, rook relocation) are ignored because
//! only the resulting king exposure matters. Checkmate detection reuses the
//! same predicate as an existence search over every origin/destination pair,
//! short-circuiting on the first escape found.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::rook_home_square;
use crate::game_state::chess_types::{
    location_is_on_board, move_board_location, BoardLocation, Color, Piece, PieceKind,
    CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{
    is_king_in_check, is_square_attacked, king_square,
};
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::king_moves::king_step_is_valid;
use crate::moves::knight_moves::knight_move_is_valid;
use crate::moves::pawn_moves::pawn_move_is_valid;
use crate::moves::queen_moves::queen_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

#[inline]
fn ensure_on_board(location: BoardLocation) -> ChessResult<()> {
    if location_is_on_board(location) {
        Ok(())
    } else {
        Err(ChessErrors::OutOfBounds(location))
    }
}

/// Per-kind shape and path dispatch, including the castling branch of the
/// king rule.
fn piece_move_is_valid(
    game_state: &GameState,
    piece: Piece,
    from: BoardLocation,
    to: BoardLocation,
) -> bool {
    match piece.kind {
        PieceKind::Pawn => {
            // The en-passant target belongs to the side to move alone; a
            // pawn of the other color must not capture onto the square its
            // own side's double step exposed.
            let en_passant_square = if piece.color == game_state.side_to_move {
                game_state.en_passant_square
            } else {
                None
            };
            pawn_move_is_valid(&game_state.board, en_passant_square, piece.color, from, to)
        }
        PieceKind::Knight => knight_move_is_valid(from, to),
        PieceKind::Bishop => bishop_move_is_valid(&game_state.board, from, to),
        PieceKind::Rook => rook_move_is_valid(&game_state.board, from, to),
        PieceKind::Queen => queen_move_is_valid(&game_state.board, from, to),
        PieceKind::King => {
            if king_step_is_valid(from, to) {
                true
            } else if to.1 == from.1 && (to.0 - from.0).abs() == 2 {
                can_castle(game_state, piece.color, to.0 > from.0)
            } else {
                false
            }
        }
    }
}

/// Tests every castling precondition for the given color and side:
/// the right is still held, the king is not in check, the rook sits unmoved
/// on its home square, the squares between king and rook are empty, and no
/// square the king transits (origin through destination) is attacked.
pub fn can_castle(game_state: &GameState, color: Color, kingside: bool) -> bool {
    let right = match (color, kingside) {
        (Color::Light, true) => CASTLE_LIGHT_KINGSIDE,
        (Color::Light, false) => CASTLE_LIGHT_QUEENSIDE,
        (Color::Dark, true) => CASTLE_DARK_KINGSIDE,
        (Color::Dark, false) => CASTLE_DARK_QUEENSIDE,
    };
    if game_state.castling_rights & right == 0 {
        return false;
    }

    let Some(king_from) = king_square(&game_state.board, color) else {
        return false;
    };
    if is_square_attacked(&game_state.board, king_from, color.opposite()) {
        return false;
    }

    let rook_from = rook_home_square(color, kingside);
    match game_state.board.view(rook_from) {
        Some(rook) if rook.color == color && rook.kind == PieceKind::Rook => {}
        _ => return false,
    }

    let step: i8 = if kingside { 1 } else { -1 };

    // Guards hand-built positions where the rights flags lie about the
    // king's whereabouts and two files over would leave the board.
    let Ok(king_to) = move_board_location(king_from, 2 * step, 0) else {
        return false;
    };

    // Squares strictly between king and rook must be empty.
    let mut file = king_from.0 + step;
    while file != rook_from.0 {
        if game_state.board.view((file, king_from.1)).is_some() {
            return false;
        }
        file += step;
    }

    // Each square the king transits is tested on a fresh board copy with
    // the king placed there; the rook has not moved yet for this check.
    let destination_file = king_to.0;
    let mut file = king_from.0;
    loop {
        let transit = (file, king_from.1);
        let mut trial = game_state.board;
        trial.remove(king_from);
        trial.place(
            transit,
            Piece {
                color,
                kind: PieceKind::King,
            },
        );
        if is_square_attacked(&trial, transit, color.opposite()) {
            return false;
        }
        if file == destination_file {
            break;
        }
        file += step;
    }

    true
}

/// Legality predicate for a specific color, independent of whose turn it is.
/// Used directly by the checkmate search; `is_legal_move` binds it to the
/// side to move.
fn is_legal_move_for(
    game_state: &GameState,
    color: Color,
    from: BoardLocation,
    to: BoardLocation,
) -> bool {
    let Some(piece) = game_state.board.view(from) else {
        return false;
    };
    if piece.color != color {
        return false;
    }
    if let Some(target) = game_state.board.view(to) {
        if target.color == piece.color {
            return false;
        }
    }
    if !piece_move_is_valid(game_state, piece, from, to) {
        return false;
    }

    // King-safety filter on an isolated board copy.
    let mut trial = game_state.board;
    trial.relocate(from, to);
    !is_king_in_check(&trial, color)
}

/// Tests whether the side to move may play `from` -> `to`. Pure; repeated
/// calls never mutate shared state. Off-board coordinates are a caller
/// contract violation and produce an error rather than `Ok(false)`.
pub fn is_legal_move(
    game_state: &GameState,
    from: BoardLocation,
    to: BoardLocation,
) -> ChessResult<bool> {
    ensure_on_board(from)?;
    ensure_on_board(to)?;
    Ok(is_legal_move_for(game_state, game_state.side_to_move, from, to))
}

/// Every square the piece on `from` may legally move to. Intended for
/// click-driven destination highlighting in a front end.
pub fn legal_destinations(
    game_state: &GameState,
    from: BoardLocation,
) -> ChessResult<Vec<BoardLocation>> {
    ensure_on_board(from)?;
    let mut destinations = Vec::new();
    for file in 0..8i8 {
        for rank in 0..8i8 {
            if is_legal_move_for(game_state, game_state.side_to_move, from, (file, rank)) {
                destinations.push((file, rank));
            }
        }
    }
    Ok(destinations)
}

/// Tests whether the king of `color` is currently attacked.
#[inline]
pub fn is_check(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(&game_state.board, color)
}

/// Tests whether `color` is checkmated: in check with no legal move at all.
/// A position with legal moves short-circuits on the first one found.
/// Stalemate (no legal move, not in check) is not terminal for this engine.
pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    if !is_check(game_state, color) {
        return false;
    }

    for (from, piece) in game_state.board.iter_pieces() {
        if piece.color != color {
            continue;
        }
        for file in 0..8i8 {
            for rank in 0..8i8 {
                if is_legal_move_for(game_state, color, from, (file, rank)) {
                    return false;
                }
            }
        }
    }
    true
}

/// Validates and executes one move for the side to move.
///
/// Returns `Ok(false)` and leaves the state untouched when the move is
/// illegal or the game is already over. On acceptance the successor state
/// replaces the aggregate wholesale, checkmate is evaluated for the new side
/// to move, and the game-over flag is set accordingly.
pub fn try_move(
    game_state: &mut GameState,
    from: BoardLocation,
    to: BoardLocation,
) -> ChessResult<bool> {
    if game_state.game_over {
        return Ok(false);
    }
    if !is_legal_move(game_state, from, to)? {
        return Ok(false);
    }

    let mut next = apply_move(game_state, from, to)?;
    if is_checkmate(&next, next.side_to_move) {
        next.game_over = true;
    }
    *game_state = next;
    Ok(true)
}
