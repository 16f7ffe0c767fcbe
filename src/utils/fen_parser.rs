//! FEN-to-GameState parser.
//!
//! Builds a complete aggregate from a Forsyth-Edwards Notation string. The
//! first four fields (layout, side, castling, en passant) are required; the
//! clock fields are validated when present but discarded, since this engine
//! tracks no clocks.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{
    BoardLocation, CastlingRights, Color, Piece, PieceKind, CASTLE_DARK_KINGSIDE,
    CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_location;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing side-to-move".to_owned()))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing castling rights".to_owned()))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing en-passant square".to_owned()))?;

    // Clocks are accepted for compatibility but not modeled.
    for clock_part in parts.by_ref().take(2) {
        clock_part.parse::<u16>().map_err(|_| {
            ChessErrors::InvalidFenString(format!("invalid clock field: {clock_part}"))
        })?;
    }
    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFenString(
            "extra trailing fields".to_owned(),
        ));
    }

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenString(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenString(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as i8;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidFenString(format!("invalid piece character '{ch}'"))
            })?;

            if file >= 8 {
                return Err(ChessErrors::InvalidFenString(
                    "board rank has too many files".to_owned(),
                ));
            }

            game_state.board.place((file, rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenString(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFenString(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(ChessErrors::InvalidFenString(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }
    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<BoardLocation>> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    let location = algebraic_to_location(en_passant_part).map_err(|_| {
        ChessErrors::InvalidFenString(format!("invalid en-passant square: {en_passant_part}"))
    })?;
    Ok(Some(location))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece { color, kind })
}
