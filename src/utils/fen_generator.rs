//! GameState-to-FEN generator.
//!
//! The engine tracks no clocks, so the halfmove and fullmove fields are
//! always emitted as `0 1`.

use crate::game_state::chess_types::{
    Color, Piece, PieceKind, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE,
    CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::location_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut fen = String::new();

    for rank in (0..8i8).rev() {
        let mut empty_run = 0u8;
        for file in 0..8i8 {
            match game_state.board.view((file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    fen.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match game_state.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    fen.push(' ');
    if game_state.castling_rights == 0 {
        fen.push('-');
    } else {
        if game_state.castling_rights & CASTLE_LIGHT_KINGSIDE != 0 {
            fen.push('K');
        }
        if game_state.castling_rights & CASTLE_LIGHT_QUEENSIDE != 0 {
            fen.push('Q');
        }
        if game_state.castling_rights & CASTLE_DARK_KINGSIDE != 0 {
            fen.push('k');
        }
        if game_state.castling_rights & CASTLE_DARK_QUEENSIDE != 0 {
            fen.push('q');
        }
    }

    fen.push(' ');
    match game_state
        .en_passant_square
        .and_then(|square| location_to_algebraic(square).ok())
    {
        Some(square) => fen.push_str(&square),
        None => fen.push('-'),
    }

    fen.push_str(" 0 1");
    fen
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => ch.to_ascii_uppercase(),
        Color::Dark => ch,
    }
}
