//! Core value types shared by every engine subsystem.

use crate::chess_errors::{ChessErrors, ChessResult};

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a single pawn push. Light pawns advance toward rank 7,
    /// Dark pawns toward rank 0.
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece occupying one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// A (file, rank) pair, each in `0..=7`. Rank 0 is Light's back rank.
pub type BoardLocation = (i8, i8);

/// Offsets a board location by a file and rank delta, rejecting results that
/// fall off the board.
#[inline]
pub fn move_board_location(x: BoardLocation, d_file: i8, d_rank: i8) -> ChessResult<BoardLocation> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if location_is_on_board(y) {
        Ok(y)
    } else {
        Err(ChessErrors::OutOfBounds(y))
    }
}

#[inline]
pub fn location_is_on_board(x: BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE;
