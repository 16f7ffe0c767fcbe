//! Errors used throughout the chess rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities, and move application. Illegal moves are *not* errors:
//! legality queries report them as `Ok(false)` and leave state untouched.
//! `ChessErrors` covers caller contract violations (off-board coordinates,
//! moving from an empty square) and malformed textual input (FEN, algebraic
//! coordinates).

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::BoardLocation;

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for the chess rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate outside the `0..=7` board range was supplied or produced.
    ///
    /// Payload: the offending (file, rank) pair.
    OutOfBounds(BoardLocation),

    /// `apply_move` was asked to move from a square that holds no piece.
    ///
    /// Payload: the empty origin square.
    NoPieceAtSquare(BoardLocation),

    /// The provided FEN string is invalid or could not be parsed.
    ///
    /// Payload: a human-readable description of the offending field.
    InvalidFenString(String),

    /// An algebraic coordinate string (for example "e4") failed to parse.
    ///
    /// Payload: the offending string.
    InvalidAlgebraicSquare(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds(location) => {
                write!(
                    f,
                    "board location ({}, {}) is outside the 8x8 board",
                    location.0, location.1
                )
            }
            ChessErrors::NoPieceAtSquare(location) => {
                write!(
                    f,
                    "no piece on origin square ({}, {})",
                    location.0, location.1
                )
            }
            ChessErrors::InvalidFenString(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::InvalidAlgebraicSquare(square) => {
                write!(f, "invalid algebraic square: {square}")
            }
        }
    }
}

impl Error for ChessErrors {}
