//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output, ranks 8 down
/// to 1, files a through h.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8i8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8i8 {
            match game_state.board.view((file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::King) => '♔',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Dark, PieceKind::King) => '♚',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Pawn) => '♟',
    }
}
