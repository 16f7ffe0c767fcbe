//! The game-session aggregate.
//!
//! `GameState` bundles everything a single game needs: the board, the side
//! to move, castling rights, the en-passant target, and the game-over flag.
//! It is the one mutable object of a session; validators work on it
//! read-only, and `try_move` replaces it wholesale with the successor state.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{BoardLocation, CastlingRights, Color};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<BoardLocation>,
    pub game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            game_over: false,
        }
    }
}

impl GameState {
    /// An empty aggregate, used by the FEN parser as its fill target.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard initial position, Light to move, all rights held.
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Replaces this session with a fresh game.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }
}
