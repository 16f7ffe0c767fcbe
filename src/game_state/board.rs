//! Mailbox board representation.
//!
//! `Board` is an 8x8 grid of optional pieces. It is deliberately `Copy` so
//! that trial moves (king-safety and castling-transit simulation) operate on
//! cheap value copies and never observe or mutate live state.

use crate::game_state::chess_types::{BoardLocation, Color, Piece, PieceKind};

/// 8x8 grid of optional pieces, indexed as `squares[file][rank]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board with no pieces placed.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Piece on the given square, if any. Callers must supply on-board
    /// coordinates; the public engine entry points validate before reaching
    /// this layer.
    #[inline]
    pub fn view(&self, location: BoardLocation) -> Option<Piece> {
        self.squares[location.0 as usize][location.1 as usize]
    }

    #[inline]
    pub fn place(&mut self, location: BoardLocation, piece: Piece) {
        self.squares[location.0 as usize][location.1 as usize] = Some(piece);
    }

    #[inline]
    pub fn remove(&mut self, location: BoardLocation) -> Option<Piece> {
        self.squares[location.0 as usize][location.1 as usize].take()
    }

    /// Moves whatever occupies `from` onto `to`, emptying `from` and
    /// overwriting any piece on `to`.
    #[inline]
    pub fn relocate(&mut self, from: BoardLocation, to: BoardLocation) {
        let piece = self.remove(from);
        self.squares[to.0 as usize][to.1 as usize] = piece;
    }

    /// Iterates every occupied square as `(location, piece)`.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        (0..8i8).flat_map(move |file| {
            (0..8i8).filter_map(move |rank| {
                self.squares[file as usize][rank as usize]
                    .map(|piece| ((file, rank), piece))
            })
        })
    }

    /// Locates the king of the given color. Positions reachable by legal play
    /// always hold exactly one king per side, but this is not enforced, so
    /// the result is optional.
    pub fn king_square(&self, color: Color) -> Option<BoardLocation> {
        self.iter_pieces()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(location, _)| location)
    }

    /// Tests that every square strictly between `from` and `to` is empty
    /// (endpoints excluded). `from` and `to` must share a rank, file, or
    /// diagonal; the walk steps one square at a time toward `to`.
    pub fn path_is_clear(&self, from: BoardLocation, to: BoardLocation) -> bool {
        let file_step = (to.0 - from.0).signum();
        let rank_step = (to.1 - from.1).signum();

        let mut current = (from.0 + file_step, from.1 + rank_step);
        while current != to {
            if self.view(current).is_some() {
                return false;
            }
            current = (current.0 + file_step, current.1 + rank_step);
        }
        true
    }
}
